//! Line grammar of the job runner's console output.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

// The patterns are literals below; a failure to compile is a bug here, not
// a runtime condition.
#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("status filter pattern must compile")
}

#[allow(clippy::expect_used)]
fn compile_set(patterns: &[&str]) -> RegexSet {
    RegexSet::new(patterns).expect("status filter patterns must compile")
}

pub(crate) static PROGRESS: Lazy<Regex> = Lazy::new(|| compile(r"map (\d+)% reduce (\d+)%"));

pub(crate) static COUNTERS_HEADER: Lazy<Regex> = Lazy::new(|| compile(r"Counters: \d+"));

pub(crate) static COUNTER_VALUE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?:JobClient:     |\t+)([^\t]+)=(\d+)$"));

pub(crate) static COUNTER_GROUP: Lazy<Regex> =
    Lazy::new(|| compile(r"(?:JobClient:   |\t+)([^\t]+)$"));

pub(crate) static CONTINUATION: Lazy<Regex> = Lazy::new(|| compile(r"^\t+"));

/// Log lines from the framework's own subsystems.
pub(crate) static HADOOP_LOG: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?:INFO|WARN) (?:mapred|input|output|util|jvm|mapreduce|compress|reduce)\.")
});

pub(crate) static WARNING: Lazy<Regex> = Lazy::new(|| compile(r"(?i)warning(!|:)"));

/// Known noise that is never reported.
pub(crate) static IGNORED: Lazy<RegexSet> = Lazy::new(|| {
    compile_set(&[
        r"^\s*$",
        r"Warning: \$HADOOP_HOME is deprecated",
        r"Unable to load realm info from SCDynamicStore",
        r"Unable to load native-hadoop library",
        r"Snappy native library not loaded",
        r"Configuration\.deprecation:",
        r"(?i)WARN conf\.Configuration.*attempt to override final parameter.*ignoring",
    ])
});

pub(crate) fn is_hadoop_log(line: &str) -> bool {
    HADOOP_LOG.is_match(line)
}

pub(crate) fn is_ignored(line: &str) -> bool {
    IGNORED.is_match(line)
}
