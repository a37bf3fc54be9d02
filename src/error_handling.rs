//! Error type definitions.
//!
//! Infrastructure errors get dedicated types; the export paths use
//! `anyhow` with context and propagate these via `?`.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
///
/// The configuration database is an input owned by external tooling, so a
/// missing file is a hard error here rather than a cue to create one.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The configuration database file does not exist.
    #[error("Database file not found: {0}")]
    FileNotFound(String),

    /// The configuration database file exists but could not be opened.
    #[error("Database file not readable: {0}")]
    FileAccessError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}
