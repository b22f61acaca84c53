//! JSON Report Engine CLI
//!
//! Command-line interface for aggregating JSON transaction files into per-user
//! reports.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- -i input/10M.json -o output/report.json
//! cargo run -- -a stream -i input/10M.json -o output/report.csv -f csv
//! cargo run -- -a stream -f sqlite -o output/report.sqlite --log-level debug
//! ```
//!
//! # Algorithms
//!
//! - **naive** / **bulk**: read the whole file, then decode (default)
//! - **stream**: decode and aggregate one transaction at a time
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (empty arguments, unknown algorithm or format, unreadable or malformed input, write failure)

use clap::CommandFactory;
use json_report_engine::cli::{self, Checkpoints, CliArgs};
use json_report_engine::ReportError;
use std::process;
use tracing::error;

fn main() {
    let checkpoints = Checkpoints::start();

    // Parse command-line arguments using clap
    let args = cli::parse_args();
    cli::setup_logging(args.log_level.into());
    checkpoints.mark("program started");
    checkpoints.mark("flags parsed");

    if let Err(e) = cli::run(&args, &checkpoints) {
        error!("{}", e);
        if matches!(e, ReportError::InvalidArguments { .. }) {
            let _ = CliArgs::command().print_help();
        }
        process::exit(1);
    }
}
