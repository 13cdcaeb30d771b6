//! Convenient re-exports for writing jobs.
//!
//! # Example
//!
//! ```
//! use hadoop_kit::prelude::*;
//!
//! struct Lengths;
//!
//! impl Processor for Lengths {
//!     fn types(&self) -> ProcessorTypes {
//!         ProcessorTypes::new().output(ConverterKind::Text, ConverterKind::Long)
//!     }
//! }
//!
//! impl Mapper for Lengths {
//!     fn map(&mut self, _key: NativeValue, line: NativeValue, out: &mut Emitter<'_>) -> std::result::Result<(), TaskError> {
//!         let line = line.as_text().unwrap_or_default().to_string();
//!         let len = line.len() as i64;
//!         out.emit(line, len)
//!     }
//! }
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Values and converters
pub use crate::convert::{
    ConvertError, ConverterKind, ConverterRegistry, NativeValue, Packable, TypeConverter,
    WireType, WireValue,
};

// Processors
pub use crate::task::{
    Emitter, GroupedValues, MapTask, Mapper, Processor, ProcessorTypes, ReduceTask, Reducer,
    TaskContext, TaskError,
};

// Job definition
pub use crate::job::{JobBuilder, JobConfiguration, JobDefinition, JobError, NamedOutputOptions};

// Secondary sort
pub use crate::slice::{
    BinaryComparator, BinaryPartitioner, KeySlice, Partitioner, RawComparator, SecondarySort,
};

// Status reporting
pub use crate::status::{ConsoleReporter, StatusEvent, StatusFilter, StatusListener};

// Job process harness (requires "runner" feature)
#[cfg(feature = "runner")]
pub use crate::runner::{run_job, JobCommand, JobOutcome, RunnerError};
