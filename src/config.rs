use std::path::PathBuf;

use clap::{Parser, ValueEnum};

// Fixed strings shared by the exporters.
/// Asyn port name used in every input link.
pub const ASYN_PORT: &str = "CENTRAL_NODE";
/// Polling period label written into SCAN fields.
pub const SCAN_PERIOD: &str = "1 second";
/// Record-name macro prefix expanded by the downstream template loader.
pub const BASE_MACRO: &str = "$(BASE)";
/// Record-name suffix for the latched variant of a device input.
pub const LATCHED_SUFFIX: &str = "_LATCHED";
/// Record-name suffix for a mitigation device's allowed-class record.
pub const ALLOWED_CLASS_SUFFIX: &str = "_ALLOWED_CLASS";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Command-line options and configuration.
///
/// One positional argument names the MPS configuration database. Each of the
/// four `--<target>` options names the template file for that export; leaving
/// an option off skips the corresponding export entirely.
///
/// # Examples
///
/// ```bash
/// # Export everything
/// mps-epics-export mps_gun.db \
///     --device-inputs device-inputs.template \
///     --analog-devices analog-devices.template \
///     --mitigation-devices mitigation.template \
///     --faults faults.template
///
/// # Only the digital channels
/// mps-epics-export mps_gun.db --device-inputs device-inputs.template
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "mps-epics-export",
    about = "Exports an MPS configuration database into EPICS record template files."
)]
pub struct Config {
    /// MPS configuration database (SQLite file, e.g. mps_gun.db)
    #[arg(value_parser)]
    pub database: PathBuf,

    /// Template file for digital channel (device input) records
    #[arg(long, value_name = "FILE")]
    pub device_inputs: Option<PathBuf>,

    /// Template file for analog channel threshold records
    #[arg(long, value_name = "FILE")]
    pub analog_devices: Option<PathBuf>,

    /// Template file for mitigation device and beam class records
    #[arg(long, value_name = "FILE")]
    pub mitigation_devices: Option<PathBuf>,

    /// Template file for fault records
    #[arg(long, value_name = "FILE")]
    pub faults: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Returns true when no output target was requested.
    pub fn no_targets(&self) -> bool {
        self.device_inputs.is_none()
            && self.analog_devices.is_none()
            && self.mitigation_devices.is_none()
            && self.faults.is_none()
    }
}
