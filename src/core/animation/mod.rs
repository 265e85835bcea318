//! Animation lifecycle engine
//!
//! Host-independent: the controller talks to the page only through
//! [`AnimationHost`], so everything here runs natively under `cargo test`.

mod controller;
mod descriptor;
mod easing;
mod error;
mod host;
mod scroll;
mod section;
mod state;
mod style;
mod text;
mod timeline;

#[cfg(test)]
mod tests;

pub use controller::{AnimationController, AnimationHandle, ControllerConfig, DEFAULT_FRAME_INTERVAL_MS};
pub use descriptor::{AnimationDescriptor, ElementId, PropertyTrack, Repeat};
pub use easing::Easing;
pub use error::AnimationError;
pub use host::{AnimationHost, ListenerId, ListenerKind, ListenerTarget};
pub use scroll::{
    Edge, EdgePosition, ElementGeometry, ScrollAnchor, ScrollAnimation, ScrollRange, ScrollWindow,
    Viewport,
};
pub use section::ViewSection;
pub use state::HandleState;
pub use style::{AnimatedProperty, StyleState};
pub use text::{DEFAULT_TYPING_MS, PhraseCycle, blend_text};
pub use timeline::{Position, Timeline, TimelineStep};
