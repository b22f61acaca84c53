// CLI module
// Command-line interface, logging setup and the end-to-end run

mod args;

pub use args::{CliArgs, LogLevel};

use crate::io::{create_writer, open_input};
use crate::strategy::create_generator;
use crate::types::ReportError;
use clap::Parser;
use std::io::stderr;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber
///
/// Stdout stays free for anything the caller wants to print.
pub fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

/// Resolve a command-line path against the current working directory
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &str) -> Result<PathBuf, ReportError> {
    let path = Path::new(path);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(|e| {
        ReportError::invalid_arguments(format!("Failed to read working directory: {}", e))
    })?;
    Ok(cwd.join(path))
}

/// Elapsed-time checkpoints of a run
#[derive(Debug, Clone, Copy)]
pub struct Checkpoints {
    start: Instant,
}

impl Checkpoints {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Log `message` stamped with the time since start
    pub fn mark(&self, message: &str) {
        info!("{:?} {}", self.elapsed(), message);
    }
}

/// Run the whole pipeline described by `args`
///
/// Selects the generator and writer first so a bad selector fails before any
/// input is read. Nothing is written unless the report was fully generated.
pub fn run(args: &CliArgs, checkpoints: &Checkpoints) -> Result<(), ReportError> {
    args.validate()?;
    let generator = create_generator(&args.algorithm)?;
    let format = create_writer(&args.format)?;
    checkpoints.mark("flags validated");

    let input_path = resolve_path(&args.input)?;
    let input = open_input(&input_path)?;
    checkpoints.mark("input opened");

    let report = generator.generate(input)?;
    info!(algorithm = %generator, users = report.len(), "report generated");
    checkpoints.mark("report generated");

    let output_path = resolve_path(&args.output)?;
    format.write(&report, &output_path)?;
    info!(format = %format, path = %output_path.display(), "report written");
    checkpoints.mark("report written");

    Ok(())
}
