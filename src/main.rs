//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mx_filter` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//! - Exit status (0 on completion, 1 on any setup or I/O failure)

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mx_filter::initialization::init_logger_with;
use mx_filter::{run_filter, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_filter(config).await {
        Ok(report) => {
            println!(
                "Filtered {} domain{} that don't use a blocked mail provider ({} dropped, {} failed of {} rows in {:.1}s).",
                report.kept,
                if report.kept == 1 { "" } else { "s" },
                report.dropped,
                report.failed,
                report.total_rows,
                report.elapsed_seconds
            );
            println!(
                "Results saved in {}; deny-list ({}) in {}; ignore-list ({}) in {}",
                report.outputs.filtered.display(),
                report.denied_domains,
                report.outputs.deny_list.display(),
                report.ignored_domains,
                report.outputs.ignore_list.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("mx_filter error: {:#}", e);
            process::exit(1);
        }
    }
}
