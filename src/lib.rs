//! mps_epics_export library: EPICS template generation from an MPS
//! configuration database.
//!
//! This library reads a machine-protection-system configuration database
//! (SQLite) and renders its digital channel inputs, analog device threshold
//! states, mitigation devices, beam classes, and fault definitions into flat
//! EPICS record template files.
//!
//! # Example
//!
//! ```no_run
//! use mps_epics_export::{run_export, Config};
//! use clap::Parser;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from([
//!     "mps-epics-export",
//!     "mps_gun.db",
//!     "--faults",
//!     "faults.template",
//! ]);
//!
//! let report = run_export(config).await?;
//! println!("Wrote {} records", report.total_records());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime (database access goes through
//! sqlx). Use `#[tokio::main]` in your application or call library functions
//! from within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_export, ExportReport};
pub use storage::{
    AnalogDeviceView, BeamClassView, DeviceInputView, DeviceStateView, FaultView,
    MitigationDeviceView,
};

// Internal run module (contains the export orchestration)
mod run {
    use std::fs::File;
    use std::io::BufWriter;
    use std::path::{Path, PathBuf};
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::config::Config;
    use crate::export::{
        export_analog_devices, export_device_inputs, export_faults, export_mitigation_devices,
    };
    use crate::storage::{
        fetch_analog_devices, fetch_beam_classes, fetch_device_inputs, fetch_faults,
        fetch_mitigation_devices, init_db_pool,
    };

    /// Results of one export run.
    ///
    /// Each per-target count is `None` when that target was not requested
    /// and `Some(records_written)` when it was.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Path to the configuration database that was read
        pub db_path: PathBuf,
        /// Records written to the device inputs template
        pub device_inputs: Option<usize>,
        /// Records written to the analog devices template
        pub analog_devices: Option<usize>,
        /// Records written to the mitigation devices template
        pub mitigation_devices: Option<usize>,
        /// Records written to the faults template
        pub faults: Option<usize>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl ExportReport {
        /// Total records written across all requested targets.
        pub fn total_records(&self) -> usize {
            [
                self.device_inputs,
                self.analog_devices,
                self.mitigation_devices,
                self.faults,
            ]
            .iter()
            .flatten()
            .sum()
        }

        /// Number of template files written.
        pub fn files_written(&self) -> usize {
            [
                self.device_inputs,
                self.analog_devices,
                self.mitigation_devices,
                self.faults,
            ]
            .iter()
            .filter(|t| t.is_some())
            .count()
        }
    }

    /// Runs the export with the provided configuration.
    ///
    /// This is the main entry point for the library. It opens the
    /// configuration database read-only, then runs each requested exporter
    /// in turn — device inputs, analog devices, mitigation devices, faults —
    /// each against its own output file. Targets without an output path are
    /// skipped entirely.
    ///
    /// # Errors
    ///
    /// The first failure (database open, query, or file write) aborts the
    /// run. Files completed by earlier exporters remain on disk; a file
    /// mid-write keeps whatever content was flushed.
    pub async fn run_export(config: Config) -> Result<ExportReport> {
        let start = Instant::now();

        let pool = init_db_pool(&config.database)
            .await
            .context("Failed to open configuration database")?;

        if config.no_targets() {
            warn!("No output targets requested; nothing to export");
        }

        let mut report = ExportReport {
            db_path: config.database.clone(),
            device_inputs: None,
            analog_devices: None,
            mitigation_devices: None,
            faults: None,
            elapsed_seconds: 0.0,
        };

        if let Some(path) = &config.device_inputs {
            let inputs = fetch_device_inputs(&pool)
                .await
                .context("Failed to query device inputs")?;
            let written = export_device_inputs(create_sink(path)?, &inputs)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} device input records ({} channels) to {}",
                written,
                inputs.len(),
                path.display()
            );
            report.device_inputs = Some(written);
        }

        if let Some(path) = &config.analog_devices {
            let devices = fetch_analog_devices(&pool)
                .await
                .context("Failed to query analog devices")?;
            let written = export_analog_devices(create_sink(path)?, &devices)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} analog device records ({} devices) to {}",
                written,
                devices.len(),
                path.display()
            );
            report.analog_devices = Some(written);
        }

        if let Some(path) = &config.mitigation_devices {
            let devices = fetch_mitigation_devices(&pool)
                .await
                .context("Failed to query mitigation devices")?;
            let beam_classes = fetch_beam_classes(&pool)
                .await
                .context("Failed to query beam classes")?;
            let written = export_mitigation_devices(create_sink(path)?, &devices, &beam_classes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} mitigation records ({} devices, {} beam classes) to {}",
                written,
                devices.len(),
                beam_classes.len(),
                path.display()
            );
            report.mitigation_devices = Some(written);
        }

        if let Some(path) = &config.faults {
            let faults = fetch_faults(&pool).await.context("Failed to query faults")?;
            let written = export_faults(create_sink(path)?, &faults)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} fault records to {}",
                written,
                path.display()
            );
            report.faults = Some(written);
        }

        report.elapsed_seconds = start.elapsed().as_secs_f64();
        Ok(report)
    }

    /// Opens one output template file for writing.
    fn create_sink(path: &Path) -> Result<BufWriter<File>> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(BufWriter::new(file))
    }
}
