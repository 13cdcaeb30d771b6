//! Command line configuration file.
//!
//! Every key is optional:
//!
//! ```toml
//! [hadoop]
//! binary = "hadoop"
//! conf = "config/local.xml"
//!
//! [project]
//! jar = "build/jobs.jar"
//! job_config = "word_count"
//! data_dir = "data/completes"
//!
//! [console]
//! silent = true
//!
//! [logging]
//! level = "info"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "hadoop-kit.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hadoop: HadoopConfig,
    pub project: ProjectConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}

/// The job runner executable.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HadoopConfig {
    /// Program to launch (e.g., "hadoop" or an absolute path).
    pub binary: PathBuf,
    /// Framework configuration file passed with `-conf`.
    pub conf: Option<PathBuf>,
}

impl Default for HadoopConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("hadoop"),
            conf: None,
        }
    }
}

/// Where the project's jobs and data live.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Job jar; defaults to `build/<project dir name>.jar`.
    pub jar: Option<PathBuf>,
    /// Job configuration to run when `--job-config` is not given.
    pub job_config: Option<String>,
    /// Directory input globs are resolved against.
    pub data_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            jar: None,
            job_config: None,
            data_dir: PathBuf::from("data/completes"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Hide raw job stderr, showing only classified status lines.
    pub silent: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { silent: true }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g., "debug").
    pub level: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::from_str(&content)
    }

    /// Load `path` if given, else the default file if it exists, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// The job jar, falling back to `build/<name of project_dir>.jar`.
    pub fn jar_path(&self, project_dir: &Path) -> PathBuf {
        self.project.jar.clone().unwrap_or_else(|| {
            let name = project_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "job".to_string());
            Path::new("build").join(format!("{}.jar", name))
        })
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String, std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config file '{}': {}", path, e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
