//! Harness Error Types

use crate::app::harness::command::Command;
use crate::core::error_handling::ContextualError;
use crate::queue::QueueError;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },

    #[error("{command}: missing argument <{argument}>")]
    MissingArgument {
        command: Command,
        argument: &'static str,
    },

    #[error("{command}: invalid argument '{value}'")]
    InvalidArgument { command: Command, value: String },

    #[error("{command}: no current queue (use 'new' first)")]
    NoQueue { command: Command },

    #[error("{command}: queue is empty")]
    EmptyQueue { command: Command },

    #[error("Removed value {actual} != expected value {expected}")]
    Mismatch { expected: String, actual: String },

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContextualError for HarnessError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, HarnessError::Queue(_) | HarnessError::Io(_))
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;
