pub mod animation;
pub mod icon;
pub mod pages;
pub mod sections;

pub use animation::{AnimationContext, provide_animation_context, use_animation_context};
pub use icon::{Icon, icons};
pub use pages::{HomePage, NotFoundPage};
