//! Error types for launching jobs.

use thiserror::Error;

/// Errors that prevent a job from running to completion.
///
/// A job that runs and exits unsuccessfully is not an error; see
/// [`JobOutcome::success`](super::JobOutcome::success).
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to capture job {0}")]
    MissingPipe(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stream reader task panicked or was cancelled.
    #[error("Stream reader failed: {0}")]
    Reader(String),

    #[error("Output path already exists: {0}")]
    OutputExists(String),
}
