//! Animation failure taxonomy.
//!
//! None of these are fatal: registration degrades to a no-op handle and the
//! element keeps its resting style.

use super::descriptor::ElementId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnimationError {
    #[error("target element `{0}` is not mounted")]
    MissingTargetElement(ElementId),

    #[error("handle {0} was already released")]
    StaleHandleRelease(u64),

    #[error("viewport geometry is not available yet")]
    ViewportUnavailable,

    #[error("invalid scroll anchor `{0}`")]
    InvalidScrollAnchor(String),

    #[error("phrase sequence is empty")]
    EmptySequence,
}
