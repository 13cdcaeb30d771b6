//! In-memory harness for running mappers and reducers without a cluster.
//!
//! [`RecordingContext`] stands in for the framework: it records every
//! written pair and counter, and its configuration runs the framework in
//! local mode. [`shuffle`] sorts and groups map output the way the
//! framework does between the map and reduce phases, so a full job can be
//! exercised in a unit test.

use std::cmp::Ordering;
use std::sync::{Mutex, PoisonError};

use crate::convert::{ConvertError, ConverterKind, NativeValue, TypeConverter, WireValue};
use crate::job::{JobConfiguration, FRAMEWORK_NAME_KEY};
use crate::slice::RawComparator;
use crate::status::{CounterTable, StatusEvent, StatusListener};
use crate::task::{MapTask, Mapper, ReduceTask, Reducer, TaskContext, TaskError};

/// A pair written to a named output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRecord {
    pub output: String,
    pub key: WireValue,
    pub value: WireValue,
    pub path: Option<String>,
}

/// A [`TaskContext`] that keeps everything written to it.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    configuration: JobConfiguration,
    records: Vec<(WireValue, WireValue)>,
    named: Vec<NamedRecord>,
    counters: CounterTable,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingContext {
    /// A context whose configuration selects the local framework.
    pub fn new() -> Self {
        let mut configuration = JobConfiguration::new();
        configuration.set(FRAMEWORK_NAME_KEY, "local");
        Self::with_configuration(configuration)
    }

    pub fn with_configuration(configuration: JobConfiguration) -> Self {
        Self {
            configuration,
            records: Vec::new(),
            named: Vec::new(),
            counters: CounterTable::new(),
        }
    }

    pub fn configuration_mut(&mut self) -> &mut JobConfiguration {
        &mut self.configuration
    }

    pub fn records(&self) -> &[(WireValue, WireValue)] {
        &self.records
    }

    pub fn named_records(&self) -> &[NamedRecord] {
        &self.named
    }

    pub fn counters(&self) -> &CounterTable {
        &self.counters
    }

    pub fn into_records(self) -> Vec<(WireValue, WireValue)> {
        self.records
    }

    /// Decode the main output through fresh converters of the given kinds.
    pub fn decoded(
        &self,
        key: ConverterKind,
        value: ConverterKind,
    ) -> Result<Vec<(NativeValue, NativeValue)>, ConvertError> {
        let mut key_converter = TypeConverter::new(key);
        let mut value_converter = TypeConverter::new(value);
        self.records
            .iter()
            .map(|(k, v)| {
                Ok((
                    key_converter.convert_to_native(k.clone())?,
                    value_converter.convert_to_native(v.clone())?,
                ))
            })
            .collect()
    }
}

impl TaskContext for RecordingContext {
    fn configuration(&self) -> &JobConfiguration {
        &self.configuration
    }

    fn write(&mut self, key: &WireValue, value: &WireValue) -> Result<(), TaskError> {
        self.records.push((key.clone(), value.clone()));
        Ok(())
    }

    fn write_named(
        &mut self,
        output: &str,
        key: &WireValue,
        value: &WireValue,
        path: Option<&str>,
    ) -> Result<(), TaskError> {
        self.named.push(NamedRecord {
            output: output.to_string(),
            key: key.clone(),
            value: value.clone(),
            path: path.map(str::to_string),
        });
        Ok(())
    }

    fn increment_counter(&mut self, group: &str, name: &str, amount: i64) {
        self.counters.increment(group, name, amount);
    }
}

/// Run `mapper` over `records` in a fresh [`RecordingContext`].
pub fn run_mapper<M, I>(mapper: M, records: I) -> Result<RecordingContext, TaskError>
where
    M: Mapper,
    I: IntoIterator<Item = (WireValue, WireValue)>,
{
    let mut context = RecordingContext::new();
    MapTask::new(mapper).run(records, &mut context)?;
    Ok(context)
}

/// Run `reducer` over already grouped input in a fresh [`RecordingContext`].
pub fn run_reducer<R, I, V>(reducer: R, groups: I) -> Result<RecordingContext, TaskError>
where
    R: Reducer,
    I: IntoIterator<Item = (WireValue, V)>,
    V: IntoIterator<Item = WireValue>,
{
    let mut context = RecordingContext::new();
    ReduceTask::new(reducer).run(groups, &mut context)?;
    Ok(context)
}

/// Sort map output by full key bytes, then group consecutive keys that
/// `grouping` considers equal. Each group is keyed by its first key.
///
/// Keys that are not byte-comparable sort as empty.
pub fn shuffle(
    mut records: Vec<(WireValue, WireValue)>,
    grouping: &dyn RawComparator,
) -> Vec<(WireValue, Vec<WireValue>)> {
    records.sort_by(|(a, _), (b, _)| key_bytes(a).cmp(key_bytes(b)));
    let mut groups: Vec<(WireValue, Vec<WireValue>)> = Vec::new();
    for (key, value) in records {
        let same_group = groups.last().is_some_and(|(first, _)| {
            grouping.compare(key_bytes(first), key_bytes(&key)) == Ordering::Equal
        });
        match groups.last_mut() {
            Some((_, values)) if same_group => values.push(value),
            _ => groups.push((key, vec![value])),
        }
    }
    groups
}

fn key_bytes(key: &WireValue) -> &[u8] {
    key.comparable_bytes().unwrap_or(&[])
}

/// A [`StatusListener`] that keeps every event it receives.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<StatusEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StatusEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StatusListener for EventLog {
    fn on_event(&self, event: StatusEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
