//! Reasons an editor request was ignored.
//!
//! None of these are failures. The canvas is forgiving: a request that cannot
//! apply leaves the scene and history exactly as they were, and the caller is
//! free to drop the value.

use thiserror::Error;

use super::scene::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Skip {
    #[error("text content is blank")]
    BlankContent,

    #[error("no element with id {0}")]
    MissingElement(ElementId),

    #[error("no drag gesture in progress")]
    NotDragging,

    #[error("dragging requires Move mode")]
    NotMoveMode,
}
