use crate::types::ReportError;
use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

/// Aggregate JSON transactions into a per-user report
#[derive(Parser, Debug)]
#[command(name = "json-report-engine")]
#[command(about = "Aggregate JSON transactions into a per-user report", long_about = None)]
pub struct CliArgs {
    /// Report generation algorithm
    #[arg(
        short = 'a',
        long = "algorithm",
        value_name = "ALGORITHM",
        default_value = "naive",
        help = "Algorithm to use: naive (alias bulk), stream"
    )]
    pub algorithm: String,

    /// Input JSON file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        default_value = "input/10M.json",
        help = "Path to input file"
    )]
    pub input: String,

    /// Output report file
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "output/report.json",
        help = "Path to output file"
    )]
    pub output: String,

    /// Output report format
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        default_value = "json",
        help = "Report format: json, csv, sqlite"
    )]
    pub format: String,

    /// Verbosity of the checkpoint log written to stderr
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: LogLevel,
}

/// Log levels accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl CliArgs {
    /// Reject empty input, output or format values
    ///
    /// clap accepts `-i ""`; the run cannot.
    pub fn validate(&self) -> Result<(), ReportError> {
        for (flag, value) in [
            ("input", &self.input),
            ("output", &self.output),
            ("format", &self.format),
        ] {
            if value.trim().is_empty() {
                return Err(ReportError::invalid_arguments(format!(
                    "--{} must not be empty",
                    flag
                )));
            }
        }
        Ok(())
    }
}
