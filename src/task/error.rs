//! Error types for task execution.

use thiserror::Error;

use super::lifecycle::TaskState;
use crate::convert::ConvertError;

/// Errors raised while driving a mapper or reducer.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A record or emitted value failed conversion.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// A lifecycle hook was called out of order.
    #[error("Cannot {action} a task in state {state}")]
    Lifecycle {
        action: &'static str,
        state: TaskState,
    },

    #[error("Unknown named output: {0}")]
    UnknownNamedOutput(String),

    /// The task context refused a write.
    #[error("Output error: {0}")]
    Output(String),

    /// Failure reported by user processor code.
    #[error("{0}")]
    Processor(String),
}

impl TaskError {
    /// Wrap a failure raised by processor code.
    pub fn processor(message: impl Into<String>) -> Self {
        Self::Processor(message.into())
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::Convert(e) if e.is_type_mismatch())
    }

    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::Lifecycle { .. })
    }
}
