//! Native (in-process) values and their structured encodings.

use super::error::ConvertError;

/// An in-process value decoded from, or about to be encoded to, the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
    Text(String),
    Array(Vec<NativeValue>),
    /// Ordered key/value pairs; insertion order survives both structured codecs.
    Map(Vec<(NativeValue, NativeValue)>),
}

impl NativeValue {
    /// Short name of the representation kind, used in mismatch errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NativeValue::Nil => "nil",
            NativeValue::Bool(_) => "bool",
            NativeValue::Int(_) => "integer",
            NativeValue::Float(_) => "float",
            NativeValue::Bytes(_) => "bytes",
            NativeValue::Text(_) => "text",
            NativeValue::Array(_) => "array",
            NativeValue::Map(_) => "map",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, NativeValue::Nil)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            NativeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            NativeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            NativeValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[NativeValue]> {
        match self {
            NativeValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a text key in a map value.
    pub fn get(&self, key: &str) -> Option<&NativeValue> {
        match self {
            NativeValue::Map(entries) => entries
                .iter()
                .find(|(k, _)| k.as_text() == Some(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    pub(crate) fn to_msgpack(&self) -> rmpv::Value {
        match self {
            NativeValue::Nil => rmpv::Value::Nil,
            NativeValue::Bool(b) => rmpv::Value::Boolean(*b),
            NativeValue::Int(i) => rmpv::Value::Integer((*i).into()),
            NativeValue::Float(f) => rmpv::Value::F64(*f),
            NativeValue::Bytes(b) => rmpv::Value::Binary(b.clone()),
            NativeValue::Text(s) => rmpv::Value::String(s.clone().into()),
            NativeValue::Array(items) => {
                rmpv::Value::Array(items.iter().map(NativeValue::to_msgpack).collect())
            }
            NativeValue::Map(entries) => rmpv::Value::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.to_msgpack(), v.to_msgpack()))
                    .collect(),
            ),
        }
    }

    pub(crate) fn from_msgpack(value: rmpv::Value) -> Result<Self, ConvertError> {
        Ok(match value {
            rmpv::Value::Nil => NativeValue::Nil,
            rmpv::Value::Boolean(b) => NativeValue::Bool(b),
            rmpv::Value::Integer(i) => match i.as_i64() {
                Some(i) => NativeValue::Int(i),
                None => {
                    return Err(ConvertError::Decode(format!(
                        "integer {} does not fit in 64 signed bits",
                        i
                    )));
                }
            },
            rmpv::Value::F32(f) => NativeValue::Float(f64::from(f)),
            rmpv::Value::F64(f) => NativeValue::Float(f),
            rmpv::Value::String(s) => {
                NativeValue::Text(s.into_str().ok_or(ConvertError::InvalidUtf8)?)
            }
            rmpv::Value::Binary(b) => NativeValue::Bytes(b),
            rmpv::Value::Array(items) => NativeValue::Array(
                items
                    .into_iter()
                    .map(NativeValue::from_msgpack)
                    .collect::<Result<_, _>>()?,
            ),
            rmpv::Value::Map(entries) => NativeValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| Ok((NativeValue::from_msgpack(k)?, NativeValue::from_msgpack(v)?)))
                    .collect::<Result<_, ConvertError>>()?,
            ),
            rmpv::Value::Ext(tag, _) => {
                return Err(ConvertError::Decode(format!(
                    "unsupported MessagePack extension type {}",
                    tag
                )));
            }
        })
    }

    pub(crate) fn to_json(&self) -> Result<serde_json::Value, ConvertError> {
        Ok(match self {
            NativeValue::Nil => serde_json::Value::Null,
            NativeValue::Bool(b) => serde_json::Value::Bool(*b),
            NativeValue::Int(i) => serde_json::Value::from(*i),
            NativeValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| ConvertError::Encode(format!("{} is not valid JSON", f)))?,
            NativeValue::Bytes(_) => {
                return Err(ConvertError::Encode(
                    "raw bytes have no JSON representation".to_string(),
                ));
            }
            NativeValue::Text(s) => serde_json::Value::String(s.clone()),
            NativeValue::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(NativeValue::to_json)
                    .collect::<Result<_, _>>()?,
            ),
            NativeValue::Map(entries) => {
                let mut object = serde_json::Map::with_capacity(entries.len());
                for (k, v) in entries {
                    let key = k.as_text().ok_or_else(|| {
                        ConvertError::Encode(format!(
                            "JSON object keys must be text, got {}",
                            k.kind_name()
                        ))
                    })?;
                    object.insert(key.to_string(), v.to_json()?);
                }
                serde_json::Value::Object(object)
            }
        })
    }

    pub(crate) fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => NativeValue::Nil,
            serde_json::Value::Bool(b) => NativeValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => NativeValue::Int(i),
                None => NativeValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => NativeValue::Text(s),
            serde_json::Value::Array(items) => {
                NativeValue::Array(items.into_iter().map(NativeValue::from_json).collect())
            }
            serde_json::Value::Object(object) => NativeValue::Map(
                object
                    .into_iter()
                    .map(|(k, v)| (NativeValue::Text(k), NativeValue::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl From<()> for NativeValue {
    fn from(_: ()) -> Self {
        NativeValue::Nil
    }
}

impl From<bool> for NativeValue {
    fn from(b: bool) -> Self {
        NativeValue::Bool(b)
    }
}

impl From<i64> for NativeValue {
    fn from(i: i64) -> Self {
        NativeValue::Int(i)
    }
}

impl From<i32> for NativeValue {
    fn from(i: i32) -> Self {
        NativeValue::Int(i64::from(i))
    }
}

impl From<f64> for NativeValue {
    fn from(f: f64) -> Self {
        NativeValue::Float(f)
    }
}

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        NativeValue::Text(s.to_string())
    }
}

impl From<String> for NativeValue {
    fn from(s: String) -> Self {
        NativeValue::Text(s)
    }
}

impl From<&[u8]> for NativeValue {
    fn from(b: &[u8]) -> Self {
        NativeValue::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for NativeValue {
    fn from(b: Vec<u8>) -> Self {
        NativeValue::Bytes(b)
    }
}

impl From<Vec<NativeValue>> for NativeValue {
    fn from(items: Vec<NativeValue>) -> Self {
        NativeValue::Array(items)
    }
}

impl TryFrom<NativeValue> for String {
    type Error = ConvertError;

    fn try_from(value: NativeValue) -> Result<Self, Self::Error> {
        match value {
            NativeValue::Text(s) => Ok(s),
            other => Err(ConvertError::mismatch("text", other.kind_name())),
        }
    }
}

impl TryFrom<NativeValue> for i64 {
    type Error = ConvertError;

    fn try_from(value: NativeValue) -> Result<Self, Self::Error> {
        match value {
            NativeValue::Int(i) => Ok(i),
            other => Err(ConvertError::mismatch("integer", other.kind_name())),
        }
    }
}

impl TryFrom<NativeValue> for f64 {
    type Error = ConvertError;

    fn try_from(value: NativeValue) -> Result<Self, Self::Error> {
        match value {
            NativeValue::Float(f) => Ok(f),
            other => Err(ConvertError::mismatch("float", other.kind_name())),
        }
    }
}

impl TryFrom<NativeValue> for bool {
    type Error = ConvertError;

    fn try_from(value: NativeValue) -> Result<Self, Self::Error> {
        match value {
            NativeValue::Bool(b) => Ok(b),
            other => Err(ConvertError::mismatch("bool", other.kind_name())),
        }
    }
}

impl TryFrom<NativeValue> for Vec<u8> {
    type Error = ConvertError;

    fn try_from(value: NativeValue) -> Result<Self, Self::Error> {
        match value {
            NativeValue::Bytes(b) => Ok(b),
            other => Err(ConvertError::mismatch("bytes", other.kind_name())),
        }
    }
}
