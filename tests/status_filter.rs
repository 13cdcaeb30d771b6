//! Status filter behaviour on captured job logs.

mod common;

use common::{COUNTERS_LOG, HADOOP_ERROR_LOG, RUBY_ERROR_LOG};
use hadoop_kit::status::{ConsoleReporter, CounterRow, Severity, StatusEvent, StatusFilter};
use hadoop_kit::testing::EventLog;

fn filter(log: &str) -> Vec<StatusEvent> {
    let events = EventLog::new();
    StatusFilter::new().run(log.as_bytes(), &events).unwrap();
    events.events()
}

fn statuses(events: &[StatusEvent]) -> Vec<(Severity, &str)> {
    events
        .iter()
        .filter_map(|event| match event {
            StatusEvent::Status { line, severity } => Some((*severity, line.as_str())),
            _ => None,
        })
        .collect()
}

fn expected_counters_table() -> Vec<CounterRow> {
    vec![
        CounterRow::new("Rubydoop", "JRuby runtimes created", 2),
        CounterRow::separator(),
        CounterRow::new("File Output Format Counters", "Bytes Written", 8),
        CounterRow::separator(),
        CounterRow::new("FileSystemCounters", "FILE_BYTES_READ", 46115331),
        CounterRow::new("", "FILE_BYTES_WRITTEN", 46526366),
        CounterRow::separator(),
        CounterRow::new("File Input Format Counters", "Bytes Read", 214234),
        CounterRow::separator(),
        CounterRow::new("Map-Reduce Framework", "Map output materialized bytes", 417723),
        CounterRow::new("", "Map input records", 338),
        CounterRow::new("", "Reduce shuffle bytes", 0),
        CounterRow::new("", "Spilled Records", 676),
        CounterRow::new("", "Map output bytes", 416365),
        CounterRow::new("", "Total committed heap usage (bytes)", 581795840),
        CounterRow::new("", "SPLIT_RAW_BYTES", 238),
        CounterRow::new("", "Combine input records", 0),
        CounterRow::new("", "Reduce input records", 338),
        CounterRow::new("", "Reduce input groups", 338),
        CounterRow::new("", "Combine output records", 0),
        CounterRow::new("", "Reduce output records", 0),
        CounterRow::new("", "Map output records", 338),
    ]
}

#[test]
fn test_reports_progress() {
    let events = filter(COUNTERS_LOG);
    assert!(events.contains(&StatusEvent::Progress { map: 100, reduce: 100 }));
    assert!(events.contains(&StatusEvent::Progress { map: 0, reduce: 0 }));
    let progress: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, StatusEvent::Progress { .. }))
        .collect();
    assert_eq!(progress.len(), 3);
}

#[test]
fn test_reports_counter_table() {
    let events = filter(COUNTERS_LOG);
    let tables: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            StatusEvent::Counters(rows) => Some(rows),
            _ => None,
        })
        .collect();
    assert_eq!(tables.len(), 1);
    let table = tables.first().unwrap();
    for (actual, expected) in table.iter().zip(expected_counters_table()) {
        assert_eq!(*actual, expected);
    }
    assert_eq!(**table, expected_counters_table());
    assert_eq!(events.last(), Some(&StatusEvent::Counters(expected_counters_table())));
}

#[test]
fn test_counter_table_returned_from_run() {
    let events = EventLog::new();
    let counters = StatusFilter::new()
        .run(COUNTERS_LOG.as_bytes(), &events)
        .unwrap();
    assert_eq!(counters.len(), 18);
    assert_eq!(counters.get("FileSystemCounters", "FILE_BYTES_WRITTEN"), Some(46526366));
    assert_eq!(counters.to_rows(), expected_counters_table());
}

#[test]
fn test_reports_exceptions_from_processor_code() {
    let events = filter(RUBY_ERROR_LOG);
    let statuses = statuses(&events);
    for line in [
        "org.jruby.exceptions.RaiseException: (NoMethodError) undefined method `asdas' for #<DuplicatesFinder::JoinMultipleInputs:0x5d511019>",
        "  at RUBY.reduce(/tmp/hadoop-theo/hadoop-unjar8455542447103659575/duplicates_finder.rb:34)",
    ] {
        assert!(statuses.contains(&(Severity::Error, line)), "missing {line}");
    }
    assert_eq!(statuses.len(), 2);
}

#[test]
fn test_reports_warnings() {
    let events = filter(HADOOP_ERROR_LOG);
    let warning = statuses(&events)
        .into_iter()
        .find(|(_, line)| line.contains("warning: already initialized constant ClassReader"));
    assert_eq!(warning.map(|(severity, _)| severity), Some(Severity::Warning));
}

#[test]
fn test_reports_framework_exceptions() {
    let events = filter(HADOOP_ERROR_LOG);
    let statuses = statuses(&events);
    for line in [
        "java.lang.NullPointerException",
        "  at org.apache.hadoop.mapred.MapTask$MapOutputBuffer.collect(MapTask.java:1018)",
        "  at org.apache.hadoop.mapred.MapTask$NewOutputCollector.write(MapTask.java:691)",
        "  at org.apache.hadoop.mapreduce.TaskInputOutputContext.write(TaskInputOutputContext.java:80)",
        "  at sun.reflect.NativeMethodAccessorImpl.invoke0(Native Method)",
    ] {
        assert!(statuses.contains(&(Severity::Error, line)), "missing {line}");
    }
    // The stack trace ends at the next framework log line.
    assert!(!statuses.iter().any(|(_, line)| line.contains("Job complete")));
}

#[test]
fn test_empty_counter_block_still_reports_table() {
    let events = filter(HADOOP_ERROR_LOG);
    assert_eq!(events.last(), Some(&StatusEvent::Counters(Vec::new())));
}

#[test]
fn test_home_deprecation_is_not_reported() {
    let events = filter(COUNTERS_LOG);
    assert!(!statuses(&events).iter().any(|(_, line)| line.contains("$HADOOP_HOME")));
}

#[test]
fn test_spurious_framework_output_is_not_an_error() {
    let events = filter(COUNTERS_LOG);
    let errors: Vec<_> = statuses(&events)
        .into_iter()
        .filter(|(severity, _)| *severity == Severity::Error)
        .collect();
    for noise in [
        "Unable to load realm info from SCDynamicStore",
        "Unable to load native-hadoop library",
        "Snappy native library not loaded",
    ] {
        assert!(!errors.iter().any(|(_, line)| line.contains(noise)), "{noise}");
    }
    assert!(errors.is_empty());
}

#[test]
fn test_every_line_is_forwarded_raw() {
    let events = filter(RUBY_ERROR_LOG);
    let raw: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            StatusEvent::Stderr(line) => Some(line.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(raw, RUBY_ERROR_LOG.lines().collect::<Vec<_>>());
}

#[test]
fn test_console_replay() {
    let reporter = ConsoleReporter::new(Vec::new(), true);
    StatusFilter::new()
        .run(HADOOP_ERROR_LOG.as_bytes(), &reporter)
        .unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    let mut lines = out.lines();
    assert!(lines.next().unwrap().starts_with("     warning  file:/tmp/"));
    assert_eq!(lines.next(), Some("    progress  map 0%, reduce 0%"));
    assert_eq!(lines.next(), Some("       error  java.lang.NullPointerException"));
}
