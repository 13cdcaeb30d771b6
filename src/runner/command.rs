//! The job runner's command line.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::process::Command;

/// How to start one job.
///
/// The job runner is invoked as
///
/// ```text
/// <program> [launcher args...] jar <jar> [-conf <conf>] <job> <input> <output> [extra args...]
/// ```
///
/// where `<job>` names the job configuration inside the jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCommand {
    program: PathBuf,
    launcher_args: Vec<OsString>,
    jar: PathBuf,
    conf: Option<PathBuf>,
    job: String,
    input: String,
    output: String,
    extra_args: Vec<OsString>,
    working_dir: Option<PathBuf>,
    env: Vec<(OsString, OsString)>,
}

impl JobCommand {
    pub fn new(
        program: impl Into<PathBuf>,
        jar: impl Into<PathBuf>,
        job: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            launcher_args: Vec::new(),
            jar: jar.into(),
            conf: None,
            job: job.into(),
            input: input.into(),
            output: output.into(),
            extra_args: Vec::new(),
            working_dir: None,
            env: Vec::new(),
        }
    }

    /// Arguments passed to the program ahead of the `jar` subcommand, e.g.
    /// a script path when the program is an interpreter.
    pub fn launcher_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.launcher_args.push(arg.into());
        self
    }

    /// Framework configuration file passed with `-conf`.
    pub fn conf(mut self, path: impl Into<PathBuf>) -> Self {
        self.conf = Some(path.into());
        self
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn job(&self) -> &str {
        &self.job
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Every argument after the program, in order.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args = self.launcher_args.clone();
        args.push("jar".into());
        args.push(self.jar.clone().into_os_string());
        if let Some(conf) = &self.conf {
            args.push("-conf".into());
            args.push(conf.clone().into_os_string());
        }
        args.push(self.job.clone().into());
        args.push(self.input.clone().into());
        args.push(self.output.clone().into());
        args.extend(self.extra_args.iter().cloned());
        args
    }

    pub(crate) fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.to_args());
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_order() {
        let command = JobCommand::new("hadoop", "build/job.jar", "word_count", "data/in/*", "data/out")
            .conf("config/local.xml")
            .arg("-verbose");
        let args: Vec<String> = command
            .to_args()
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect();
        assert_eq!(
            args,
            [
                "jar",
                "build/job.jar",
                "-conf",
                "config/local.xml",
                "word_count",
                "data/in/*",
                "data/out",
                "-verbose"
            ]
        );
    }

    #[test]
    fn test_without_conf_with_launcher() {
        let command = JobCommand::new("/bin/sh", "job.jar", "j", "in", "out").launcher_arg("fake-hadoop.sh");
        let args = command.to_args();
        assert_eq!(args.first().map(|a| a.as_os_str()), Some(std::ffi::OsStr::new("fake-hadoop.sh")));
        assert_eq!(args.len(), 6);
        assert_eq!(command.job(), "j");
        assert_eq!(command.output(), "out");
    }
}
