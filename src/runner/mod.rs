//! Launching a job as a subprocess and following its output.
//!
//! The job runner's standard output and standard error are drained by two
//! concurrent readers. Standard output lines are forwarded as
//! [`StatusEvent::Stdout`]; standard error goes through a
//! [`StatusFilter`]. Only after both streams reach end of file is the exit
//! status collected and reported as [`StatusEvent::Done`] or
//! [`StatusEvent::Failed`].

mod command;
mod error;

use std::process::{ExitStatus, Stdio};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

pub use command::JobCommand;
pub use error::RunnerError;

use crate::logging::{debug, info, warn};
use crate::status::{CounterTable, StatusEvent, StatusFilter, StatusListener};

/// What a finished job left behind.
#[derive(Debug)]
pub struct JobOutcome {
    pub status: ExitStatus,
    /// Counters parsed from the job's standard error.
    pub counters: CounterTable,
    pub stdout_lines: usize,
    pub stderr_lines: usize,
}

impl JobOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, `None` when the job was killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }
}

/// Run a job to completion, reporting to `listener` as it goes.
///
/// The job's standard input is closed. Returns once the process has exited
/// and both of its output streams are drained; an unsuccessful exit is
/// reported through [`StatusEvent::Failed`] and [`JobOutcome::success`],
/// not as an error.
pub async fn run_job(
    command: &JobCommand,
    listener: Arc<dyn StatusListener>,
) -> Result<JobOutcome, RunnerError> {
    let program = command.program().display().to_string();
    info!(program = %program, job = command.job(), "launching job");

    let mut child = command
        .to_command()
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RunnerError::Spawn { program, source })?;

    let stdout = child.stdout.take().ok_or(RunnerError::MissingPipe("stdout"))?;
    let stderr = child.stderr.take().ok_or(RunnerError::MissingPipe("stderr"))?;

    let stdout_listener = Arc::clone(&listener);
    let stdout_task = tokio::spawn(async move {
        let mut count: usize = 0;
        for_each_line(stdout, |line| {
            count += 1;
            stdout_listener.on_event(StatusEvent::Stdout(line));
        })
        .await?;
        Ok::<_, std::io::Error>(count)
    });

    let stderr_listener = Arc::clone(&listener);
    let stderr_task = tokio::spawn(async move {
        let mut filter = StatusFilter::new();
        let mut count: usize = 0;
        for_each_line(stderr, |line| {
            count += 1;
            filter.feed_line(&line, &*stderr_listener);
        })
        .await?;
        Ok::<_, std::io::Error>((filter.finish(&*stderr_listener), count))
    });

    let (stdout_result, stderr_result) = tokio::try_join!(stdout_task, stderr_task)
        .map_err(|e| RunnerError::Reader(e.to_string()))?;
    let stdout_lines = stdout_result?;
    let (counters, stderr_lines) = stderr_result?;

    let status = child.wait().await?;
    if status.success() {
        debug!(stdout_lines, stderr_lines, "job succeeded");
        listener.on_event(StatusEvent::Done);
    } else {
        warn!(code = ?status.code(), "job failed");
        listener.on_event(StatusEvent::Failed {
            code: status.code(),
        });
    }

    Ok(JobOutcome {
        status,
        counters,
        stdout_lines,
        stderr_lines,
    })
}

/// Read `stream` to end of file, handing each line to `f` without its line
/// terminator. Invalid UTF-8 is replaced rather than treated as an error.
async fn for_each_line<R, F>(stream: R, mut f: F) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    F: FnMut(String),
{
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        f(line.trim_end_matches(['\n', '\r']).to_string());
    }
}
