//! The task context seam and the emitter processors write through.

use std::collections::HashMap;

use super::error::TaskError;
use super::types::ProcessorTypes;
use crate::convert::{ConverterKind, NativeValue, TypeConverter, WireType, WireValue};
use crate::job::{JobConfiguration, NamedOutput};

/// The framework side of a running task.
///
/// Writes receive wire values that are only valid for the duration of the
/// call; the converter slots they borrow from are reused for the next
/// record.
pub trait TaskContext {
    fn configuration(&self) -> &JobConfiguration;

    /// Write one pair to the task's main output.
    fn write(&mut self, key: &WireValue, value: &WireValue) -> Result<(), TaskError>;

    /// Write one pair to a named output, optionally under `path` relative to
    /// the job's output directory.
    fn write_named(
        &mut self,
        output: &str,
        key: &WireValue,
        value: &WireValue,
        path: Option<&str>,
    ) -> Result<(), TaskError>;

    /// Add `amount` to a user counter.
    fn increment_counter(&mut self, group: &str, name: &str, amount: i64);
}

/// Output converters owned by a task driver.
#[derive(Debug)]
pub(crate) struct OutputSlots {
    key: TypeConverter,
    value: TypeConverter,
    named: HashMap<String, (TypeConverter, TypeConverter)>,
}

impl OutputSlots {
    pub(crate) fn new(types: &ProcessorTypes) -> Self {
        let (key, value) = types.output_converters();
        Self {
            key,
            value,
            named: HashMap::new(),
        }
    }

    fn named_slots(
        &mut self,
        output: &str,
        conf: &JobConfiguration,
    ) -> Result<&mut (TypeConverter, TypeConverter), TaskError> {
        if !self.named.contains_key(output) {
            let declared = NamedOutput::from_configuration(conf, output)
                .ok_or_else(|| TaskError::UnknownNamedOutput(output.to_string()))?;
            let key = ConverterKind::from_wire_type(WireType::from_class_name(&declared.key_class)?);
            let value =
                ConverterKind::from_wire_type(WireType::from_class_name(&declared.value_class)?);
            self.named.insert(
                output.to_string(),
                (TypeConverter::new(key), TypeConverter::new(value)),
            );
        }
        self.named
            .get_mut(output)
            .ok_or_else(|| TaskError::UnknownNamedOutput(output.to_string()))
    }
}

/// Handle passed to processor hooks for emitting output.
///
/// `emit` encodes the pair through the processor's declared output
/// converters; a value of the wrong native kind fails with a type mismatch
/// and nothing is written.
pub struct Emitter<'a> {
    slots: &'a mut OutputSlots,
    context: &'a mut dyn TaskContext,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(slots: &'a mut OutputSlots, context: &'a mut dyn TaskContext) -> Self {
        Self { slots, context }
    }

    pub fn emit(
        &mut self,
        key: impl Into<NativeValue>,
        value: impl Into<NativeValue>,
    ) -> Result<(), TaskError> {
        self.slots.key.set_native(key.into())?;
        self.slots.value.set_native(value.into())?;
        self.context.write(self.slots.key.wire(), self.slots.value.wire())
    }

    /// Emit to a named output declared on the job.
    ///
    /// Named outputs are encoded with the base converter of their declared
    /// wire classes.
    pub fn emit_named(
        &mut self,
        output: &str,
        key: impl Into<NativeValue>,
        value: impl Into<NativeValue>,
        path: Option<&str>,
    ) -> Result<(), TaskError> {
        let (key_slot, value_slot) = self.slots.named_slots(output, self.context.configuration())?;
        key_slot.set_native(key.into())?;
        value_slot.set_native(value.into())?;
        self.context
            .write_named(output, key_slot.wire(), value_slot.wire(), path)
    }

    pub fn increment_counter(&mut self, group: &str, name: &str, amount: i64) {
        self.context.increment_counter(group, name, amount);
    }

    pub fn configuration(&self) -> &JobConfiguration {
        self.context.configuration()
    }
}
