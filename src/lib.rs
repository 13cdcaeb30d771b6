//! Typed mappers and reducers, binary secondary sort and a console status
//! filter for Hadoop MapReduce jobs.
//!
//! # Quick Start
//!
//! ```
//! use hadoop_kit::prelude::*;
//! use hadoop_kit::task::patterns::SumReducer;
//! use hadoop_kit::testing::run_reducer;
//!
//! let context = run_reducer(
//!     SumReducer,
//!     [(WireValue::text("apples"), vec![WireValue::Long(3), WireValue::Long(4)])],
//! )?;
//! let output = context.decoded(ConverterKind::Text, ConverterKind::Long)?;
//! assert_eq!(output, vec![(NativeValue::from("apples"), NativeValue::from(7i64))]);
//! # Ok::<(), hadoop_kit::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`convert`] - Wire/native value converters and the converter registry
//! - [`task`] - Mapper and reducer contracts and the task drivers
//! - [`slice`] - Byte-slice partitioners, comparators and secondary sort
//! - [`job`] - Job configuration and the job definition builder
//! - [`status`] - Parsing a job's console output into status events
//! - [`runner`] - Launching a job as a subprocess (requires `runner` feature)
//! - [`testing`] - In-memory task context for unit tests
//! - `config` - Command line configuration file (requires `cli` feature)
//!
//! # Feature Flags
//!
//! - `runner` - Enable the subprocess job harness (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `full` - Enable all features

#[cfg(feature = "cli")]
pub mod config;
pub mod convert;
pub mod job;
mod logging;
pub mod prelude;
#[cfg(feature = "runner")]
pub mod runner;
pub mod slice;
pub mod status;
pub mod task;
pub mod testing;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

pub use convert::{ConvertError, ConverterKind, NativeValue, TypeConverter, WireType, WireValue};
pub use job::{JobBuilder, JobConfiguration, JobDefinition, JobError};
pub use slice::{BinaryComparator, BinaryPartitioner, KeySlice, SecondarySort};
pub use status::{StatusEvent, StatusFilter, StatusListener};
pub use task::{Emitter, Mapper, Processor, ProcessorTypes, Reducer, TaskContext, TaskError};

#[cfg(feature = "runner")]
pub use runner::{run_job, JobCommand, JobOutcome, RunnerError};
