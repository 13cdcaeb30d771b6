//! Per-task lifecycle state machine.

use std::fmt;

use super::error::TaskError;
use crate::logging::trace;

/// Where a task instance is in its `setup -> process* -> cleanup` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Created,
    Setup,
    Processing,
    Cleanup,
    Done,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskState::Created => "created",
            TaskState::Setup => "setup",
            TaskState::Processing => "processing",
            TaskState::Cleanup => "cleanup",
            TaskState::Done => "done",
        };
        f.write_str(name)
    }
}

/// Guards the order in which the framework drives a task.
///
/// Setup runs exactly once before any record, cleanup exactly once after
/// the last one. A task that skipped straight from setup to cleanup is
/// valid: an empty input split still runs both hooks.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    state: TaskState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: TaskState::Created,
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn begin_setup(&mut self) -> Result<(), TaskError> {
        self.advance("set up", &[TaskState::Created], TaskState::Setup)
    }

    pub fn begin_process(&mut self) -> Result<(), TaskError> {
        self.advance(
            "process records in",
            &[TaskState::Setup, TaskState::Processing],
            TaskState::Processing,
        )
    }

    pub fn begin_cleanup(&mut self) -> Result<(), TaskError> {
        self.advance(
            "clean up",
            &[TaskState::Setup, TaskState::Processing],
            TaskState::Cleanup,
        )
    }

    pub fn finish(&mut self) -> Result<(), TaskError> {
        self.advance("finish", &[TaskState::Cleanup], TaskState::Done)
    }

    fn advance(
        &mut self,
        action: &'static str,
        from: &[TaskState],
        to: TaskState,
    ) -> Result<(), TaskError> {
        if !from.contains(&self.state) {
            return Err(TaskError::Lifecycle {
                action,
                state: self.state,
            });
        }
        if self.state != to {
            trace!(from = %self.state, to = %to, "task transition");
        }
        self.state = to;
        Ok(())
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
