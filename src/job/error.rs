//! Error types for job configuration.

use thiserror::Error;

use crate::convert::ConvertError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JobError {
    /// A key or value type name did not resolve to a converter.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("Invalid {direction} format: {name:?}")]
    InvalidFormat {
        direction: &'static str,
        name: String,
    },

    /// A named output needs an output format, and the job has none yet.
    #[error("Named output '{0}' has no format and the job output format is not set")]
    MissingOutputFormat(String),

    #[error("Invalid named output name: {0:?}")]
    InvalidOutputName(String),

    #[error("Named output '{0}' is already defined")]
    DuplicateNamedOutput(String),

    #[error("Job has no {0}")]
    Incomplete(&'static str),
}
