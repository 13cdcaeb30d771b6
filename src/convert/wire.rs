//! Wire-side key/value representations.
//!
//! These mirror the framework's serialized types: `BytesWritable`, `Text`,
//! `LongWritable` and `NullWritable`. The crate never looks inside the
//! framework's serialization; a [`WireValue`] is the payload the framework
//! hands to (or receives from) a task.

use std::fmt;
use std::str::FromStr;

use super::error::ConvertError;

const IO_PACKAGE: &str = "org.apache.hadoop.io.";

/// The closed set of framework key/value classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    BytesWritable,
    Text,
    LongWritable,
    NullWritable,
}

impl WireType {
    pub const ALL: [WireType; 4] = [
        WireType::BytesWritable,
        WireType::Text,
        WireType::LongWritable,
        WireType::NullWritable,
    ];

    /// Simple class name, e.g. `LongWritable`.
    pub fn simple_name(self) -> &'static str {
        match self {
            WireType::BytesWritable => "BytesWritable",
            WireType::Text => "Text",
            WireType::LongWritable => "LongWritable",
            WireType::NullWritable => "NullWritable",
        }
    }

    /// Fully qualified class name as written into job configurations.
    pub fn class_name(self) -> String {
        format!("{}{}", IO_PACKAGE, self.simple_name())
    }

    /// Resolve a class name, either fully qualified or simple.
    pub fn from_class_name(name: &str) -> Result<Self, ConvertError> {
        let simple = name.strip_prefix(IO_PACKAGE).unwrap_or(name);
        WireType::ALL
            .into_iter()
            .find(|ty| ty.simple_name() == simple)
            .ok_or_else(|| ConvertError::UnsupportedType(name.to_string()))
    }

    /// The value a freshly created converter holds before the first record.
    pub fn empty_value(self) -> WireValue {
        match self {
            WireType::BytesWritable => WireValue::Bytes(Vec::new()),
            WireType::Text => WireValue::Text(Vec::new()),
            WireType::LongWritable => WireValue::Long(0),
            WireType::NullWritable => WireValue::Null,
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name())
    }
}

impl FromStr for WireType {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_class_name(s)
    }
}

/// A framework-side value.
///
/// `Text` carries raw bytes: the framework does not guarantee valid UTF-8,
/// so validation happens when the value is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireValue {
    Bytes(Vec<u8>),
    Text(Vec<u8>),
    Long(i64),
    Null,
}

impl WireValue {
    pub fn text(s: &str) -> Self {
        WireValue::Text(s.as_bytes().to_vec())
    }

    pub fn bytes(b: &[u8]) -> Self {
        WireValue::Bytes(b.to_vec())
    }

    pub fn wire_type(&self) -> WireType {
        match self {
            WireValue::Bytes(_) => WireType::BytesWritable,
            WireValue::Text(_) => WireType::Text,
            WireValue::Long(_) => WireType::LongWritable,
            WireValue::Null => WireType::NullWritable,
        }
    }

    /// The byte content the framework compares for binary-comparable types.
    ///
    /// Returns `None` for types that are not compared byte-wise.
    pub fn comparable_bytes(&self) -> Option<&[u8]> {
        match self {
            WireValue::Bytes(b) | WireValue::Text(b) => Some(b.as_slice()),
            WireValue::Long(_) | WireValue::Null => None,
        }
    }

    /// Number of payload bytes, as reported by the framework's `getLength`.
    pub fn len(&self) -> usize {
        self.comparable_bytes().map_or(0, <[u8]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
