//! Events reported while a job runs.

use std::fmt;

use super::counters::CounterRow;

/// Classification of a reported console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// Map and reduce completion percentages.
    Progress { map: u32, reduce: u32 },
    /// A line of an error or warning block.
    Status { line: String, severity: Severity },
    /// The flattened counter table, emitted once at end of stream.
    Counters(Vec<CounterRow>),
    /// A raw line from the job's standard output.
    Stdout(String),
    /// A raw line from the job's standard error, whatever it classified as.
    Stderr(String),
    /// The job exited successfully.
    Done,
    /// The job exited unsuccessfully; `code` is `None` when it was killed
    /// by a signal.
    Failed { code: Option<i32> },
}

/// Receives status events.
///
/// Listeners are shared between the stdout and stderr readers of a running
/// job, so calls may arrive concurrently from two tasks. Events from one
/// stream arrive in stream order; nothing is guaranteed across streams.
pub trait StatusListener: Send + Sync {
    fn on_event(&self, event: StatusEvent);
}

impl<F> StatusListener for F
where
    F: Fn(StatusEvent) + Send + Sync,
{
    fn on_event(&self, event: StatusEvent) {
        self(event)
    }
}
