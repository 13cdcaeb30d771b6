//! Error types for key/value conversion.

use thiserror::Error;

/// Errors that can occur while converting between wire and native values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A value of the wrong representation kind was handed to a converter.
    #[error("Hadoop type mismatch, was {actual}, expected {expected}")]
    TypeMismatch { expected: String, actual: String },

    /// No converter is registered for the requested name or wire class.
    #[error("Unsupported Hadoop type: {0}")]
    UnsupportedType(String),

    #[error("Invalid UTF-8 in text value")]
    InvalidUtf8,

    /// A structured value could not be serialized.
    #[error("Encoding error: {0}")]
    Encode(String),

    /// Wire bytes could not be parsed back into a structured value.
    #[error("Decoding error: {0}")]
    Decode(String),

    #[error("Record arity mismatch: expected {expected} fields, got {actual}")]
    Arity { expected: usize, actual: usize },
}

impl ConvertError {
    pub(crate) fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Returns `true` for [`ConvertError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns `true` for [`ConvertError::UnsupportedType`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedType(_))
    }
}
