//! The line-oriented status filter.

use std::io::BufRead;

use super::counters::CounterTable;
use super::events::{Severity, StatusEvent, StatusListener};
use super::patterns::{
    is_hadoop_log, is_ignored, CONTINUATION, COUNTERS_HEADER, COUNTER_GROUP, COUNTER_VALUE,
    PROGRESS, WARNING,
};
use crate::logging::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterState {
    Normal,
    InCounters,
    InError(Severity),
}

/// Classifies the job runner's standard error line by line.
///
/// * `map N% reduce M%` reports progress.
/// * `Counters: N` opens a counters block. Inside it, framework log lines
///   and tab-indented lines are read as group headers or `name=value`
///   counters; any other line closes the block.
/// * A line that is neither a framework log line nor known noise opens an
///   error block, classified as a warning when it matches
///   `warning!`/`warning:` and as an error otherwise. Every following line
///   that is not a framework log line is reported with the same severity
///   until a framework log line closes the block.
/// * Known noise (blank lines, deprecation notices, missing native library
///   warnings) is dropped without closing any block.
///
/// Every line is additionally forwarded as [`StatusEvent::Stderr`]. The
/// filter never fails on unexpected input.
#[derive(Debug)]
pub struct StatusFilter {
    state: FilterState,
    group: Option<String>,
    counters: CounterTable,
}

impl StatusFilter {
    pub fn new() -> Self {
        Self {
            state: FilterState::Normal,
            group: None,
            counters: CounterTable::new(),
        }
    }

    /// Counters recorded so far.
    pub fn counters(&self) -> &CounterTable {
        &self.counters
    }

    pub fn in_counters_block(&self) -> bool {
        self.state == FilterState::InCounters
    }

    /// Severity of the open error block, if any.
    pub fn error_block(&self) -> Option<Severity> {
        match self.state {
            FilterState::InError(severity) => Some(severity),
            _ => None,
        }
    }

    /// Classify one line and report what it means to `listener`.
    pub fn feed_line(&mut self, line: &str, listener: &dyn StatusListener) {
        let line = line.trim_end_matches(['\n', '\r']);
        let hadoop_log = is_hadoop_log(line);
        match self.state {
            FilterState::InCounters if hadoop_log || CONTINUATION.is_match(line) => {
                self.read_counter_line(line);
            }
            FilterState::InError(severity) if !hadoop_log && !is_ignored(line) => {
                report(listener, line, severity);
            }
            _ if is_ignored(line) => {}
            _ => {
                self.state = FilterState::Normal;
                self.classify(line, hadoop_log, listener);
            }
        }
        listener.on_event(StatusEvent::Stderr(line.to_string()));
    }

    /// End of stream: report the counter table and hand it back.
    pub fn finish(self, listener: &dyn StatusListener) -> CounterTable {
        debug!(counters = self.counters.len(), "status filter finished");
        listener.on_event(StatusEvent::Counters(self.counters.to_rows()));
        self.counters
    }

    /// Filter a whole stream.
    pub fn run<R: BufRead>(
        mut self,
        reader: R,
        listener: &dyn StatusListener,
    ) -> std::io::Result<CounterTable> {
        for line in reader.lines() {
            self.feed_line(&line?, listener);
        }
        Ok(self.finish(listener))
    }

    fn read_counter_line(&mut self, line: &str) {
        if let Some(caps) = COUNTER_VALUE.captures(line) {
            let name = caps.get(1).map(|m| m.as_str().trim());
            let value = caps.get(2).and_then(|m| m.as_str().parse::<i64>().ok());
            if let (Some(group), Some(name), Some(value)) = (self.group.as_deref(), name, value) {
                trace!(group, name, value, "counter");
                self.counters.record(group, name, value);
            }
        } else if let Some(caps) = COUNTER_GROUP.captures(line) {
            self.group = caps.get(1).map(|m| m.as_str().trim().to_string());
        }
    }

    fn classify(&mut self, line: &str, hadoop_log: bool, listener: &dyn StatusListener) {
        if let Some(caps) = PROGRESS.captures(line) {
            let percent = |i| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
            if let (Some(map), Some(reduce)) = (percent(1), percent(2)) {
                listener.on_event(StatusEvent::Progress { map, reduce });
            }
        } else if COUNTERS_HEADER.is_match(line) {
            debug!("counters block started");
            self.state = FilterState::InCounters;
        } else if !hadoop_log {
            let severity = if WARNING.is_match(line) {
                Severity::Warning
            } else {
                Severity::Error
            };
            self.state = FilterState::InError(severity);
            report(listener, line, severity);
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn report(listener: &dyn StatusListener, line: &str, severity: Severity) {
    listener.on_event(StatusEvent::Status {
        line: line.to_string(),
        severity,
    });
}
