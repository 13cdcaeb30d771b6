//! Conversion between framework wire values and native values.
//!
//! Every key and value position of a task is backed by a [`TypeConverter`]
//! of one [`ConverterKind`]:
//!
//! | kind      | wire class      | native value  |
//! |-----------|-----------------|---------------|
//! | `binary`  | `BytesWritable` | bytes         |
//! | `text`    | `Text`          | UTF-8 text    |
//! | `long`    | `LongWritable`  | 64-bit int    |
//! | `none`    | `NullWritable`  | nil           |
//! | `encoded` | `BytesWritable` | array / map (MessagePack) |
//! | `json`    | `Text`          | array / map (JSON)        |

mod converter;
mod error;
mod native;
mod packable;
mod registry;
mod wire;

pub use converter::{ConverterKind, TypeConverter};
pub use error::ConvertError;
pub use native::NativeValue;
pub use packable::Packable;
pub use registry::ConverterRegistry;
pub use wire::{WireType, WireValue};
