//! Errors raised by widget commands

use thiserror::Error;

use super::TaskId;

/// A rejected widget command. The widget state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("Please select a task before starting the timer")]
    NoTaskSelected,

    #[error("Please enter a task")]
    EmptyTaskText,

    #[error("No task with id {0}")]
    UnknownTask(TaskId),
}

/// Failure of a command against the server-hosted widget session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error("Failed to lock widget state: {0}")]
    StateUnavailable(String),
}
