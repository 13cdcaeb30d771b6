//! Bidirectional converters between wire and native values.

use std::fmt;
use std::str::FromStr;

use super::error::ConvertError;
use super::native::NativeValue;
use super::packable::Packable;
use super::wire::{WireType, WireValue};

/// The symbolic converter kinds a processor can declare for its keys and values.
///
/// `Encoded` and `Json` are layered on top of `Binary` and `Text`: they
/// share the wire class of the codec they wrap and carry structured
/// (array or map) native values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConverterKind {
    Binary,
    Text,
    Long,
    None,
    /// MessagePack-packed structure over `BytesWritable`.
    Encoded,
    /// JSON document over `Text`.
    Json,
}

impl ConverterKind {
    pub const ALL: [ConverterKind; 6] = [
        ConverterKind::Binary,
        ConverterKind::Text,
        ConverterKind::Long,
        ConverterKind::None,
        ConverterKind::Encoded,
        ConverterKind::Json,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConverterKind::Binary => "binary",
            ConverterKind::Text => "text",
            ConverterKind::Long => "long",
            ConverterKind::None => "none",
            ConverterKind::Encoded => "encoded",
            ConverterKind::Json => "json",
        }
    }

    /// Resolve a converter kind by its symbolic name.
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        ConverterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ConvertError::UnsupportedType(name.to_string()))
    }

    /// Reverse lookup from a framework class to its base converter.
    pub fn from_wire_type(wire_type: WireType) -> Self {
        match wire_type {
            WireType::BytesWritable => ConverterKind::Binary,
            WireType::Text => ConverterKind::Text,
            WireType::LongWritable => ConverterKind::Long,
            WireType::NullWritable => ConverterKind::None,
        }
    }

    pub fn wire_type(self) -> WireType {
        match self {
            ConverterKind::Binary | ConverterKind::Encoded => WireType::BytesWritable,
            ConverterKind::Text | ConverterKind::Json => WireType::Text,
            ConverterKind::Long => WireType::LongWritable,
            ConverterKind::None => WireType::NullWritable,
        }
    }

    /// Description of the native kind this converter accepts.
    pub fn expected_native(self) -> &'static str {
        match self {
            ConverterKind::Binary => "bytes",
            ConverterKind::Text => "text",
            ConverterKind::Long => "integer",
            ConverterKind::None => "nil",
            ConverterKind::Encoded | ConverterKind::Json => "array or map",
        }
    }
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConverterKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// A single-slot codec for one key or value position of a task.
///
/// The converter owns the current wire value. It is created once per task
/// and reused for every record, so setting a native value overwrites the
/// previous wire buffer in place. The native view is decoded from the slot
/// on demand.
#[derive(Debug, Clone)]
pub struct TypeConverter {
    kind: ConverterKind,
    wire: WireValue,
}

impl TypeConverter {
    pub fn new(kind: ConverterKind) -> Self {
        Self {
            kind,
            wire: kind.wire_type().empty_value(),
        }
    }

    pub fn kind(&self) -> ConverterKind {
        self.kind
    }

    /// The current wire value.
    pub fn wire(&self) -> &WireValue {
        &self.wire
    }

    /// Replace the wire slot. Fails unless `wire` is the exact framework
    /// class this converter reads.
    pub fn set_wire(&mut self, wire: WireValue) -> Result<(), ConvertError> {
        let expected = self.kind.wire_type();
        if wire.wire_type() != expected {
            return Err(ConvertError::mismatch(
                expected.class_name(),
                wire.wire_type().class_name(),
            ));
        }
        self.wire = wire;
        Ok(())
    }

    /// Decode the current wire value.
    pub fn native(&self) -> Result<NativeValue, ConvertError> {
        match (self.kind, &self.wire) {
            (ConverterKind::Binary, WireValue::Bytes(b)) => Ok(NativeValue::Bytes(b.clone())),
            (ConverterKind::Text, WireValue::Text(b)) => Ok(NativeValue::Text(decode_utf8(b)?)),
            (ConverterKind::Long, WireValue::Long(i)) => Ok(NativeValue::Int(*i)),
            (ConverterKind::None, WireValue::Null) => Ok(NativeValue::Nil),
            (ConverterKind::Encoded, WireValue::Bytes(b)) => {
                let mut reader = b.as_slice();
                let value = rmpv::decode::read_value(&mut reader)
                    .map_err(|e| ConvertError::Decode(e.to_string()))?;
                NativeValue::from_msgpack(value)
            }
            (ConverterKind::Json, WireValue::Text(b)) => {
                let value: serde_json::Value = serde_json::from_slice(b)
                    .map_err(|e| ConvertError::Decode(e.to_string()))?;
                Ok(NativeValue::from_json(value))
            }
            (kind, wire) => Err(ConvertError::mismatch(
                kind.wire_type().class_name(),
                wire.wire_type().class_name(),
            )),
        }
    }

    /// Encode `value` into the wire slot.
    ///
    /// Values of any other native kind than the one this converter declares
    /// are rejected; nothing is coerced.
    pub fn set_native(&mut self, value: NativeValue) -> Result<(), ConvertError> {
        match (self.kind, value) {
            (ConverterKind::Binary, NativeValue::Bytes(b)) => self.fill_bytes(|buf| {
                buf.extend_from_slice(&b);
                Ok(())
            }),
            (ConverterKind::Text, NativeValue::Text(s)) => self.fill_bytes(|buf| {
                buf.extend_from_slice(s.as_bytes());
                Ok(())
            }),
            (ConverterKind::Long, NativeValue::Int(i)) => {
                self.wire = WireValue::Long(i);
                Ok(())
            }
            (ConverterKind::None, NativeValue::Nil) => {
                self.wire = WireValue::Null;
                Ok(())
            }
            (ConverterKind::Encoded, value @ (NativeValue::Array(_) | NativeValue::Map(_))) => {
                let packed = value.to_msgpack();
                self.fill_bytes(|buf| {
                    rmpv::encode::write_value(buf, &packed)
                        .map_err(|e| ConvertError::Encode(e.to_string()))
                })
            }
            (ConverterKind::Json, value @ (NativeValue::Array(_) | NativeValue::Map(_))) => {
                let json = value.to_json()?;
                self.fill_bytes(|buf| {
                    serde_json::to_writer(buf, &json).map_err(|e| ConvertError::Encode(e.to_string()))
                })
            }
            (kind, value) => Err(ConvertError::mismatch(
                kind.expected_native(),
                value.kind_name(),
            )),
        }
    }

    /// Decode a wire value through this converter's slot.
    pub fn convert_to_native(&mut self, wire: WireValue) -> Result<NativeValue, ConvertError> {
        self.set_wire(wire)?;
        self.native()
    }

    /// Encode a native value and return the resulting wire value.
    pub fn convert_to_wire(&mut self, value: NativeValue) -> Result<&WireValue, ConvertError> {
        self.set_native(value)?;
        Ok(&self.wire)
    }

    /// Encode a record through a structured codec.
    pub fn set_record<P: Packable>(&mut self, record: &P) -> Result<(), ConvertError> {
        self.set_native(NativeValue::Array(record.to_packable()))
    }

    /// Decode the current wire value as a record.
    pub fn record<P: Packable>(&self) -> Result<P, ConvertError> {
        match self.native()? {
            NativeValue::Array(fields) => P::from_packable(fields),
            other => Err(ConvertError::mismatch("array", other.kind_name())),
        }
    }

    /// Refill the byte slot, reusing its allocation.
    fn fill_bytes<F>(&mut self, fill: F) -> Result<(), ConvertError>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), ConvertError>,
    {
        let mut buf = match std::mem::replace(&mut self.wire, WireValue::Null) {
            WireValue::Bytes(b) | WireValue::Text(b) => b,
            WireValue::Long(_) | WireValue::Null => Vec::new(),
        };
        buf.clear();
        let result = fill(&mut buf);
        if result.is_err() {
            buf.clear();
        }
        self.wire = match self.kind.wire_type() {
            WireType::Text => WireValue::Text(buf),
            _ => WireValue::Bytes(buf),
        };
        result
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, ConvertError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| ConvertError::InvalidUtf8)
}
