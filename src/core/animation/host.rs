//! Seam between the controller and whatever renders the elements.
//!
//! The browser implementation writes to the DOM; tests use a recorder.

use derive_more::Display;

use super::descriptor::ElementId;
use super::scroll::{ElementGeometry, Viewport};
use super::style::StyleState;

/// Identity of a listener attached through the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ListenerKind {
    #[display("pointerenter")]
    PointerEnter,
    #[display("pointerleave")]
    PointerLeave,
    #[display("scroll")]
    Scroll,
    #[display("resize")]
    Resize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Element(ElementId),
    Window,
}

pub trait AnimationHost {
    fn element_exists(&self, id: &ElementId) -> bool;

    /// Document-space geometry, `None` when the element is not mounted
    fn geometry(&self, id: &ElementId) -> Option<ElementGeometry>;

    /// Viewport size and scroll offset, `None` before the first layout
    fn viewport(&self) -> Option<Viewport>;

    fn apply_style(&mut self, id: &ElementId, style: &StyleState);

    fn text(&self, id: &ElementId) -> Option<String>;

    fn set_text(&mut self, id: &ElementId, text: &str);

    /// Attach a listener; `None` when the target is missing
    fn add_listener(&mut self, target: ListenerTarget, kind: ListenerKind) -> Option<ListenerId>;

    /// Detach exactly the listener `add_listener` returned
    fn remove_listener(&mut self, id: ListenerId);

    /// Listeners that fired since the last call, in firing order
    fn drain_events(&mut self) -> Vec<ListenerId>;
}
