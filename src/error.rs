//! Unified error type for the hadoop-kit library.
//!
//! Each module has its own error type; [`Error`] wraps them all so
//! application code can use `?` across module boundaries.

use thiserror::Error;

use crate::convert::ConvertError;
use crate::job::JobError;
#[cfg(feature = "runner")]
use crate::runner::RunnerError;
use crate::task::TaskError;

/// Unified error type for all hadoop-kit operations.
///
/// # Example
///
/// ```
/// use hadoop_kit::convert::{ConverterKind, NativeValue, TypeConverter};
///
/// fn encode(value: NativeValue) -> hadoop_kit::Result<usize> {
///     let mut converter = TypeConverter::new(ConverterKind::Long);
///     Ok(converter.convert_to_wire(value)?.len())
/// }
///
/// assert!(encode(NativeValue::from("not a number")).unwrap_err().is_convert());
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error converting between native and wire values.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Error raised while running a mapper or reducer.
    #[error(transparent)]
    Task(#[from] TaskError),

    /// Error in a job definition.
    #[error(transparent)]
    Job(#[from] JobError),

    /// Error launching or following a job process.
    #[cfg(feature = "runner")]
    #[error(transparent)]
    Runner(#[from] RunnerError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a conversion error, directly or raised
    /// inside a task.
    pub fn is_convert(&self) -> bool {
        matches!(self, Self::Convert(_) | Self::Task(TaskError::Convert(_)))
    }

    pub fn is_task(&self) -> bool {
        matches!(self, Self::Task(_))
    }

    pub fn is_job(&self) -> bool {
        matches!(self, Self::Job(_))
    }

    #[cfg(feature = "runner")]
    pub fn is_runner(&self) -> bool {
        matches!(self, Self::Runner(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
