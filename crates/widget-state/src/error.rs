//! State Errors
//!
//! Every rejected widget action maps to one of these. Callers treat them as
//! no-ops: the state is left exactly as it was before the call.

use thiserror::Error;

use crate::todo::TaskId;
use crate::views::ViewMode;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("a cycle needs at least one entry")]
    EmptyCycle,

    #[error("index {index} is outside 0..{len}")]
    OutOfRange { index: usize, len: usize },

    #[error("no item with id '{0}'")]
    UnknownItem(String),

    #[error("task text is empty")]
    EmptyTask,

    #[error("no task with id {0}")]
    UnknownTask(TaskId),

    #[error("action not available in {0:?} mode")]
    WrongMode(ViewMode),

    #[error("widget has been torn down")]
    TornDown,

    #[error("invalid showcase config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StateError>;
