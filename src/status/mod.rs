//! Live status of a running job, parsed from its console output.
//!
//! The job runner writes progress, counters and failures to standard error
//! interleaved with its own log chatter. [`StatusFilter`] turns that stream
//! into [`StatusEvent`]s for a [`StatusListener`]; [`ConsoleReporter`] is
//! the listener the command line uses.

mod console;
mod counters;
mod events;
mod filter;
mod patterns;

pub use console::{format_status, format_table, ConsoleReporter};
pub use counters::{CounterRow, CounterTable};
pub use events::{Severity, StatusEvent, StatusListener};
pub use filter::StatusFilter;
