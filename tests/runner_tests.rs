//! Subprocess harness tests, using `/bin/sh` scripts as the job runner.

#![cfg(all(feature = "runner", unix))]

mod common;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hadoop_kit::runner::{run_job, JobCommand, RunnerError};
use hadoop_kit::status::{Severity, StatusEvent};
use hadoop_kit::testing::EventLog;
use tempfile::TempDir;

/// Write `body` as a shell script and return a command that runs it.
fn scripted_job(dir: &TempDir, body: &str) -> JobCommand {
    let script = dir.path().join("fake-hadoop.sh");
    std::fs::write(&script, body).unwrap();
    JobCommand::new("/bin/sh", "build/job.jar", "word_count", "data/in/*", "data/out")
        .launcher_arg(script)
}

fn log_file(dir: &TempDir, log: &str) -> PathBuf {
    let path = dir.path().join("stderr.log");
    std::fs::write(&path, log).unwrap();
    path
}

fn quoted(path: &Path) -> String {
    format!("'{}'", path.display())
}

#[tokio::test]
async fn test_successful_job_reports_counters_and_done() {
    let dir = TempDir::new().unwrap();
    let log = log_file(&dir, common::COUNTERS_LOG);
    let command = scripted_job(&dir, &format!("cat {} >&2\necho finished\n", quoted(&log)));
    let events = Arc::new(EventLog::new());

    let outcome = run_job(&command, events.clone()).await.unwrap();

    assert!(outcome.success());
    assert_eq!(outcome.code(), Some(0));
    assert_eq!(outcome.counters.get("Rubydoop", "JRuby runtimes created"), Some(2));
    assert_eq!(outcome.stdout_lines, 1);
    assert_eq!(outcome.stderr_lines, common::COUNTERS_LOG.lines().count());

    let events = events.events();
    assert!(events.contains(&StatusEvent::Stdout("finished".to_string())));
    assert!(events.contains(&StatusEvent::Progress { map: 100, reduce: 100 }));
    assert_eq!(events.last(), Some(&StatusEvent::Done));
    let counters_at = events
        .iter()
        .position(|e| matches!(e, StatusEvent::Counters(rows) if !rows.is_empty()));
    assert!(counters_at.is_some());
}

#[tokio::test]
async fn test_failed_job_reports_exit_code() {
    let dir = TempDir::new().unwrap();
    let log = log_file(&dir, common::HADOOP_ERROR_LOG);
    let command = scripted_job(&dir, &format!("cat {} >&2\nexit 3\n", quoted(&log)));
    let events = Arc::new(EventLog::new());

    let outcome = run_job(&command, events.clone()).await.unwrap();

    assert!(!outcome.success());
    assert_eq!(outcome.code(), Some(3));
    let events = events.events();
    assert_eq!(events.last(), Some(&StatusEvent::Failed { code: Some(3) }));
    assert!(events.contains(&StatusEvent::Status {
        line: "java.lang.NullPointerException".to_string(),
        severity: Severity::Error,
    }));
}

#[tokio::test]
async fn test_job_receives_launch_arguments() {
    let dir = TempDir::new().unwrap();
    let command = scripted_job(&dir, "for arg in \"$@\"; do echo \"$arg\"; done\n")
        .conf("config/local.xml")
        .arg("--extra");
    let events = Arc::new(EventLog::new());

    run_job(&command, events.clone()).await.unwrap();

    let stdout: Vec<String> = events
        .events()
        .into_iter()
        .filter_map(|e| match e {
            StatusEvent::Stdout(line) => Some(line),
            _ => None,
        })
        .collect();
    assert_eq!(
        stdout,
        [
            "jar",
            "build/job.jar",
            "-conf",
            "config/local.xml",
            "word_count",
            "data/in/*",
            "data/out",
            "--extra"
        ]
    );
}

#[tokio::test]
async fn test_stdin_is_closed() {
    let dir = TempDir::new().unwrap();
    let command = scripted_job(&dir, "cat\necho eof\n");
    let events = Arc::new(EventLog::new());

    let outcome = run_job(&command, events.clone()).await.unwrap();

    assert!(outcome.success());
    assert_eq!(outcome.stdout_lines, 1);
    assert!(events
        .events()
        .contains(&StatusEvent::Stdout("eof".to_string())));
}

#[tokio::test]
async fn test_environment_and_working_directory() {
    let dir = TempDir::new().unwrap();
    let command = scripted_job(&dir, "echo \"$JOB_ENV\"\npwd\n")
        .env("JOB_ENV", "staging")
        .current_dir(dir.path());
    let events = Arc::new(EventLog::new());

    run_job(&command, events.clone()).await.unwrap();

    let events = events.events();
    assert!(events.contains(&StatusEvent::Stdout("staging".to_string())));
    let cwd = dir.path().canonicalize().unwrap();
    assert!(events.iter().any(|e| matches!(
        e,
        StatusEvent::Stdout(line) if Path::new(line).canonicalize().ok().as_deref() == Some(cwd.as_path())
    )));
}

#[tokio::test]
async fn test_missing_program_is_a_spawn_error() {
    let command = JobCommand::new(
        "/nonexistent/hadoop",
        "job.jar",
        "word_count",
        "in",
        "out",
    );
    let err = run_job(&command, Arc::new(EventLog::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, RunnerError::Spawn { ref program, .. } if program == "/nonexistent/hadoop"));
}
