//! Declared key/value types of a processor.

use crate::convert::{ConverterKind, ConverterRegistry, ConvertError, TypeConverter};

/// Input and output converter kinds of a mapper or reducer.
///
/// Each slot is optional. An unset slot inherits from a parent declaration
/// via [`ProcessorTypes::inherit`], and a slot still unset after that
/// resolves to `text`.
///
/// ```
/// use hadoop_kit::convert::ConverterKind;
/// use hadoop_kit::task::ProcessorTypes;
///
/// let base = ProcessorTypes::new().input(ConverterKind::Text, ConverterKind::Long);
/// let types = ProcessorTypes::new()
///     .output(ConverterKind::Text, ConverterKind::Json)
///     .inherit(&base);
/// assert_eq!(types.input_value(), ConverterKind::Long);
/// assert_eq!(types.output_value(), ConverterKind::Json);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessorTypes {
    input_key: Option<ConverterKind>,
    input_value: Option<ConverterKind>,
    output_key: Option<ConverterKind>,
    output_value: Option<ConverterKind>,
}

impl ProcessorTypes {
    pub const DEFAULT_KIND: ConverterKind = ConverterKind::Text;

    pub const fn new() -> Self {
        Self {
            input_key: None,
            input_value: None,
            output_key: None,
            output_value: None,
        }
    }

    pub const fn input(mut self, key: ConverterKind, value: ConverterKind) -> Self {
        self.input_key = Some(key);
        self.input_value = Some(value);
        self
    }

    pub const fn output(mut self, key: ConverterKind, value: ConverterKind) -> Self {
        self.output_key = Some(key);
        self.output_value = Some(value);
        self
    }

    pub const fn with_input_key(mut self, kind: ConverterKind) -> Self {
        self.input_key = Some(kind);
        self
    }

    pub const fn with_input_value(mut self, kind: ConverterKind) -> Self {
        self.input_value = Some(kind);
        self
    }

    pub const fn with_output_key(mut self, kind: ConverterKind) -> Self {
        self.output_key = Some(kind);
        self
    }

    pub const fn with_output_value(mut self, kind: ConverterKind) -> Self {
        self.output_value = Some(kind);
        self
    }

    /// Declare types by converter name, e.g. `("text", "long")`.
    pub fn input_names(self, key: &str, value: &str) -> Result<Self, ConvertError> {
        let registry = ConverterRegistry::new();
        Ok(self.input(registry.resolve(key)?, registry.resolve(value)?))
    }

    pub fn output_names(self, key: &str, value: &str) -> Result<Self, ConvertError> {
        let registry = ConverterRegistry::new();
        Ok(self.output(registry.resolve(key)?, registry.resolve(value)?))
    }

    /// Fill every unset slot from `parent`.
    pub fn inherit(self, parent: &ProcessorTypes) -> Self {
        Self {
            input_key: self.input_key.or(parent.input_key),
            input_value: self.input_value.or(parent.input_value),
            output_key: self.output_key.or(parent.output_key),
            output_value: self.output_value.or(parent.output_value),
        }
    }

    pub fn input_key(&self) -> ConverterKind {
        self.input_key.unwrap_or(Self::DEFAULT_KIND)
    }

    pub fn input_value(&self) -> ConverterKind {
        self.input_value.unwrap_or(Self::DEFAULT_KIND)
    }

    pub fn output_key(&self) -> ConverterKind {
        self.output_key.unwrap_or(Self::DEFAULT_KIND)
    }

    pub fn output_value(&self) -> ConverterKind {
        self.output_value.unwrap_or(Self::DEFAULT_KIND)
    }

    /// Whether the output types were declared rather than defaulted.
    pub fn declares_output(&self) -> bool {
        self.output_key.is_some() || self.output_value.is_some()
    }

    pub(crate) fn input_converters(&self) -> (TypeConverter, TypeConverter) {
        (
            TypeConverter::new(self.input_key()),
            TypeConverter::new(self.input_value()),
        )
    }

    pub(crate) fn output_converters(&self) -> (TypeConverter, TypeConverter) {
        (
            TypeConverter::new(self.output_key()),
            TypeConverter::new(self.output_value()),
        )
    }
}
