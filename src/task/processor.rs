//! Mapper and reducer contracts and the drivers that run them.

use super::context::{Emitter, OutputSlots, TaskContext};
use super::error::TaskError;
use super::lifecycle::{Lifecycle, TaskState};
use super::types::ProcessorTypes;
use super::values::GroupedValues;
use crate::convert::{NativeValue, TypeConverter, WireValue};
use crate::logging::debug;

/// Hooks shared by mappers and reducers.
pub trait Processor {
    /// Declared key/value types. Undeclared slots default to `text`.
    fn types(&self) -> ProcessorTypes {
        ProcessorTypes::new()
    }

    /// Runs once before the first record. May emit.
    fn setup(&mut self, _out: &mut Emitter<'_>) -> Result<(), TaskError> {
        Ok(())
    }

    /// Runs once after the last record. May emit.
    fn cleanup(&mut self, _out: &mut Emitter<'_>) -> Result<(), TaskError> {
        Ok(())
    }
}

pub trait Mapper: Processor {
    /// Called once per input record.
    fn map(
        &mut self,
        key: NativeValue,
        value: NativeValue,
        out: &mut Emitter<'_>,
    ) -> Result<(), TaskError>;
}

pub trait Reducer: Processor {
    /// Called once per key group.
    fn reduce(
        &mut self,
        key: NativeValue,
        values: &mut GroupedValues<'_>,
        out: &mut Emitter<'_>,
    ) -> Result<(), TaskError>;
}

/// Converters and lifecycle shared by both drivers.
#[derive(Debug)]
struct TaskSlots {
    lifecycle: Lifecycle,
    input_key: TypeConverter,
    input_value: TypeConverter,
    output: OutputSlots,
}

impl TaskSlots {
    fn new(types: &ProcessorTypes) -> Self {
        let (input_key, input_value) = types.input_converters();
        Self {
            lifecycle: Lifecycle::new(),
            input_key,
            input_value,
            output: OutputSlots::new(types),
        }
    }
}

/// Drives one map task: `setup`, one `map` per record, `cleanup`.
///
/// The converters are created once from the mapper's declared types and
/// reused for every record.
pub struct MapTask<M> {
    mapper: M,
    slots: TaskSlots,
}

impl<M: Mapper> MapTask<M> {
    pub fn new(mapper: M) -> Self {
        let slots = TaskSlots::new(&mapper.types());
        Self { mapper, slots }
    }

    pub fn state(&self) -> TaskState {
        self.slots.lifecycle.state()
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn into_inner(self) -> M {
        self.mapper
    }

    pub fn setup(&mut self, context: &mut dyn TaskContext) -> Result<(), TaskError> {
        self.slots.lifecycle.begin_setup()?;
        debug!(state = %self.state(), "map task setup");
        let mut out = Emitter::new(&mut self.slots.output, context);
        self.mapper.setup(&mut out)
    }

    /// Decode one framework record and hand it to the mapper.
    pub fn map(
        &mut self,
        key: WireValue,
        value: WireValue,
        context: &mut dyn TaskContext,
    ) -> Result<(), TaskError> {
        self.slots.lifecycle.begin_process()?;
        let key = self.slots.input_key.convert_to_native(key)?;
        let value = self.slots.input_value.convert_to_native(value)?;
        let mut out = Emitter::new(&mut self.slots.output, context);
        self.mapper.map(key, value, &mut out)
    }

    pub fn cleanup(&mut self, context: &mut dyn TaskContext) -> Result<(), TaskError> {
        self.slots.lifecycle.begin_cleanup()?;
        let mut out = Emitter::new(&mut self.slots.output, context);
        self.mapper.cleanup(&mut out)?;
        self.slots.lifecycle.finish()
    }

    /// Run the whole lifecycle over `records`.
    pub fn run<I>(&mut self, records: I, context: &mut dyn TaskContext) -> Result<(), TaskError>
    where
        I: IntoIterator<Item = (WireValue, WireValue)>,
    {
        self.setup(context)?;
        for (key, value) in records {
            self.map(key, value, context)?;
        }
        self.cleanup(context)
    }
}

/// Drives one reduce task: `setup`, one `reduce` per key group, `cleanup`.
pub struct ReduceTask<R> {
    reducer: R,
    slots: TaskSlots,
}

impl<R: Reducer> ReduceTask<R> {
    pub fn new(reducer: R) -> Self {
        let slots = TaskSlots::new(&reducer.types());
        Self { reducer, slots }
    }

    pub fn state(&self) -> TaskState {
        self.slots.lifecycle.state()
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    pub fn into_inner(self) -> R {
        self.reducer
    }

    pub fn setup(&mut self, context: &mut dyn TaskContext) -> Result<(), TaskError> {
        self.slots.lifecycle.begin_setup()?;
        debug!(state = %self.state(), "reduce task setup");
        let mut out = Emitter::new(&mut self.slots.output, context);
        self.reducer.setup(&mut out)
    }

    /// Hand one key group to the reducer.
    ///
    /// `values` is consumed lazily as the reducer pulls from it; values the
    /// reducer leaves unread are dropped with the group.
    pub fn reduce<I>(
        &mut self,
        key: WireValue,
        values: I,
        context: &mut dyn TaskContext,
    ) -> Result<(), TaskError>
    where
        I: IntoIterator<Item = WireValue>,
    {
        self.slots.lifecycle.begin_process()?;
        let key = self.slots.input_key.convert_to_native(key)?;
        let mut source = values.into_iter();
        let mut grouped = GroupedValues::new(&mut source, &mut self.slots.input_value);
        let mut out = Emitter::new(&mut self.slots.output, context);
        self.reducer.reduce(key, &mut grouped, &mut out)
    }

    pub fn cleanup(&mut self, context: &mut dyn TaskContext) -> Result<(), TaskError> {
        self.slots.lifecycle.begin_cleanup()?;
        let mut out = Emitter::new(&mut self.slots.output, context);
        self.reducer.cleanup(&mut out)?;
        self.slots.lifecycle.finish()
    }

    /// Run the whole lifecycle over `groups`.
    pub fn run<I, V>(&mut self, groups: I, context: &mut dyn TaskContext) -> Result<(), TaskError>
    where
        I: IntoIterator<Item = (WireValue, V)>,
        V: IntoIterator<Item = WireValue>,
    {
        self.setup(context)?;
        for (key, values) in groups {
            self.reduce(key, values, context)?;
        }
        self.cleanup(context)
    }
}
