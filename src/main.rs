//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mps_epics_export` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All export functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mps_epics_export::initialization::init_logger_with;
use mps_epics_export::{run_export, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the export using the library
    match run_export(config).await {
        Ok(report) => {
            let records = report.total_records();
            let files = report.files_written();
            println!(
                "✅ Wrote {} record{} across {} template file{} in {:.1}s",
                records,
                if records == 1 { "" } else { "s" },
                files,
                if files == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Source database: {}", report.db_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("mps-epics-export error: {:#}", e);
            process::exit(1);
        }
    }
}
