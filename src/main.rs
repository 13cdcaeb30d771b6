use clap::{Parser, Subcommand};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use hadoop_kit::config::Config;
use hadoop_kit::runner::{run_job, JobCommand, RunnerError};
use hadoop_kit::status::{ConsoleReporter, StatusFilter};

#[derive(Parser)]
#[command(name = "hadoop-kit")]
#[command(about = "Launch Hadoop jobs locally and follow their progress")]
struct Cli {
    /// Configuration file (defaults to ./hadoop-kit.toml when present)
    #[arg(long, global = true, env = "HADOOP_KIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a job configuration from the project jar in local mode
    Launch {
        /// Input glob, relative to the project data directory
        #[arg(short, long)]
        input: String,

        /// Output directory (defaults to data/<job>/output)
        #[arg(short, long)]
        output: Option<String>,

        /// Name of the job configuration inside the jar
        #[arg(short, long)]
        job_config: Option<String>,

        /// Job jar (defaults to build/<project>.jar)
        #[arg(long)]
        jar: Option<PathBuf>,

        /// Framework configuration file passed with -conf
        #[arg(long)]
        conf: Option<PathBuf>,

        /// Remove the output directory before launching
        #[arg(long)]
        cleanup_before: bool,

        /// Echo the job's raw log output
        #[arg(short, long, conflicts_with = "silent")]
        verbose: bool,

        /// Show only progress, errors and counters
        #[arg(short, long)]
        silent: bool,

        /// Extra arguments passed through to the job
        #[arg(last = true)]
        extra: Vec<String>,
    },

    /// Replay a captured job log through the status filter
    Filter {
        /// Log file (reads stdin if not specified)
        file: Option<PathBuf>,

        /// Echo raw log lines as well as the classified ones
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_deref().unwrap_or("warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Launch {
            input,
            output,
            job_config,
            jar,
            conf,
            cleanup_before,
            verbose,
            silent,
            extra,
        } => {
            let project_dir = std::env::current_dir()?;
            let job = job_config
                .or_else(|| config.project.job_config.clone())
                .unwrap_or_else(|| project_name(&project_dir));
            let jar = jar.unwrap_or_else(|| config.jar_path(&project_dir));
            let output = output.unwrap_or_else(|| format!("data/{}/output", job));
            let silent = !verbose && (silent || config.console.silent);
            let reporter = Arc::new(ConsoleReporter::new(std::io::stdout(), silent));

            let output_path = Path::new(&output);
            if output_path.exists() {
                if !cleanup_before {
                    reporter.say_status("exists", &output);
                    return Err(RunnerError::OutputExists(output).into());
                }
                std::fs::remove_dir_all(output_path)?;
                reporter.say_status("remove", &output);
            }
            if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            let input_glob = config.project.data_dir.join(&input);
            let mut command = JobCommand::new(
                &config.hadoop.binary,
                jar,
                job,
                input_glob.to_string_lossy(),
                output.as_str(),
            )
            .args(extra);
            if let Some(conf) = conf.or_else(|| config.hadoop.conf.clone()) {
                command = command.conf(conf);
            }
            tracing::debug!(args = ?command.to_args(), "job command");

            reporter.say_status("running", "Hadoop started");
            let outcome = run_job(&command, reporter.clone()).await?;
            if !outcome.success() {
                std::process::exit(outcome.code().unwrap_or(1));
            }
        }

        Commands::Filter { file, verbose } => {
            let reporter = ConsoleReporter::new(std::io::stdout(), !verbose);
            let counters = match file {
                Some(path) => {
                    StatusFilter::new().run(BufReader::new(std::fs::File::open(path)?), &reporter)?
                }
                None => StatusFilter::new().run(std::io::stdin().lock(), &reporter)?,
            };
            tracing::debug!(counters = counters.len(), "log replayed");
        }
    }

    Ok(())
}

fn project_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "job".to_string())
}
