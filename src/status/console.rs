//! Console rendering of status events.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use super::counters::CounterRow;
use super::events::{StatusEvent, StatusListener};
use crate::logging::debug;

const STATUS_WIDTH: usize = 12;

/// Format a right-aligned status label followed by a message.
pub fn format_status(label: &str, message: &str) -> String {
    format!("{:>width$}  {}", label, message, width = STATUS_WIDTH)
}

/// Format counter rows as a left-aligned table with two-space gutters.
pub fn format_table(rows: &[CounterRow]) -> String {
    let columns: Vec<[String; 3]> = rows.iter().map(CounterRow::columns).collect();
    let mut widths = [0usize; 3];
    for row in &columns {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let mut out = String::new();
    for [group, name, value] in &columns {
        let [group_width, name_width, _] = widths;
        let line = format!(
            "{:<gw$}  {:<nw$}  {}",
            group,
            name,
            value,
            gw = group_width,
            nw = name_width
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Writes events to a terminal-like sink.
///
/// Raw standard error lines are echoed only when not `silent`; everything
/// else is always shown.
pub struct ConsoleReporter<W> {
    out: Mutex<W>,
    silent: bool,
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W, silent: bool) -> Self {
        Self {
            out: Mutex::new(out),
            silent,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Print a status line outside of the event stream.
    pub fn say_status(&self, label: &str, message: &str) {
        self.write(&format!("{}\n", format_status(label, message)));
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn render(&self, event: &StatusEvent) -> Option<String> {
        let text = match event {
            StatusEvent::Progress { map, reduce } => format_status(
                "progress",
                &format!("map {}%, reduce {}%", map, reduce),
            ),
            StatusEvent::Status { line, severity } => format_status(severity.as_str(), line),
            StatusEvent::Counters(rows) if rows.is_empty() => return None,
            StatusEvent::Counters(rows) => format!("\n{}", format_table(rows)),
            StatusEvent::Stdout(line) => line.clone(),
            StatusEvent::Stderr(_) if self.silent => return None,
            StatusEvent::Stderr(line) => line.clone(),
            StatusEvent::Done => format_status("done", "job succeeded"),
            StatusEvent::Failed { code: Some(code) } => {
                format_status("failed", &format!("job exited with status {}", code))
            }
            StatusEvent::Failed { code: None } => {
                format_status("failed", "job terminated by signal")
            }
        };
        Some(text)
    }

    fn write(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            debug!(error = %e, "console write failed");
        }
    }
}

impl<W: Write + Send> StatusListener for ConsoleReporter<W> {
    fn on_event(&self, event: StatusEvent) {
        if let Some(mut text) = self.render(&event) {
            if !text.ends_with('\n') {
                text.push('\n');
            }
            self.write(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Severity;

    fn rendered(silent: bool, events: Vec<StatusEvent>) -> String {
        let reporter = ConsoleReporter::new(Vec::new(), silent);
        for event in events {
            reporter.on_event(event);
        }
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_status_labels_are_right_aligned() {
        let out = rendered(
            true,
            vec![
                StatusEvent::Progress { map: 40, reduce: 0 },
                StatusEvent::Status {
                    line: "boom".to_string(),
                    severity: Severity::Error,
                },
            ],
        );
        assert_eq!(
            out,
            "    progress  map 40%, reduce 0%\n       error  boom\n"
        );
    }

    #[test]
    fn test_silent_hides_raw_stderr_only() {
        let events = || {
            vec![
                StatusEvent::Stderr("raw".to_string()),
                StatusEvent::Stdout("out".to_string()),
            ]
        };
        assert_eq!(rendered(true, events()), "out\n");
        assert_eq!(rendered(false, events()), "raw\nout\n");
    }

    #[test]
    fn test_counter_table() {
        let rows = vec![
            CounterRow::new("Rubydoop", "JRuby runtimes created", 2),
            CounterRow::separator(),
            CounterRow::new("FileSystemCounters", "FILE_BYTES_READ", 46115331),
            CounterRow::new("", "FILE_BYTES_WRITTEN", 46526366),
        ];
        assert_eq!(
            format_table(&rows),
            "Rubydoop            JRuby runtimes created  2\n\
             \n\
             FileSystemCounters  FILE_BYTES_READ         46115331\n\
             \x20                   FILE_BYTES_WRITTEN      46526366\n"
        );
    }

    #[test]
    fn test_exit_events() {
        let out = rendered(
            true,
            vec![StatusEvent::Done, StatusEvent::Failed { code: Some(2) }],
        );
        assert_eq!(
            out,
            "        done  job succeeded\n      failed  job exited with status 2\n"
        );
    }
}
