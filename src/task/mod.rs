//! Per-record processing: mappers, reducers and their task drivers.
//!
//! The framework runs each task instance on one thread and drives it
//! through `setup -> process* -> cleanup`. [`MapTask`] and [`ReduceTask`]
//! enforce that order, decode incoming wire records through the
//! processor's declared input converters and hand an [`Emitter`] to every
//! hook so output is encoded through the declared output converters.
//!
//! ```
//! use hadoop_kit::convert::{NativeValue, WireValue};
//! use hadoop_kit::task::{Emitter, Mapper, MapTask, Processor, TaskError};
//! use hadoop_kit::testing::RecordingContext;
//!
//! struct WordSplitter;
//!
//! impl Processor for WordSplitter {}
//!
//! impl Mapper for WordSplitter {
//!     fn map(
//!         &mut self,
//!         _key: NativeValue,
//!         line: NativeValue,
//!         out: &mut Emitter<'_>,
//!     ) -> Result<(), TaskError> {
//!         for word in line.as_text().unwrap_or_default().split_whitespace() {
//!             out.emit(word, "1")?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut context = RecordingContext::new();
//! let mut task = MapTask::new(WordSplitter);
//! task.run([(WireValue::text(""), WireValue::text("a b a"))], &mut context)?;
//! assert_eq!(context.records().len(), 3);
//! # Ok::<(), TaskError>(())
//! ```

mod context;
mod error;
mod lifecycle;
pub mod patterns;
mod processor;
mod types;
mod values;

pub use context::{Emitter, TaskContext};
pub use error::TaskError;
pub use lifecycle::{Lifecycle, TaskState};
pub use processor::{MapTask, Mapper, Processor, ReduceTask, Reducer};
pub use types::ProcessorTypes;
pub use values::GroupedValues;
