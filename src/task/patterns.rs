//! Ready-made processors.

use super::context::Emitter;
use super::error::TaskError;
use super::processor::{Processor, Reducer};
use super::types::ProcessorTypes;
use super::values::GroupedValues;
use crate::convert::{ConverterKind, NativeValue};

/// Emits each key with the sum of its `long` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumReducer;

impl Processor for SumReducer {
    fn types(&self) -> ProcessorTypes {
        ProcessorTypes::new()
            .input(ConverterKind::Text, ConverterKind::Long)
            .output(ConverterKind::Text, ConverterKind::Long)
    }
}

impl Reducer for SumReducer {
    fn reduce(
        &mut self,
        key: NativeValue,
        values: &mut GroupedValues<'_>,
        out: &mut Emitter<'_>,
    ) -> Result<(), TaskError> {
        let mut sum: i64 = 0;
        for value in values {
            let value = i64::try_from(value?)?;
            sum = sum.wrapping_add(value);
        }
        out.emit(key, sum)
    }
}
