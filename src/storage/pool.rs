//! Database connection pool management.
//!
//! Opens the MPS configuration database read-only. The database is an input
//! produced by external configuration tooling; it is never created or
//! modified here, and a missing file aborts the run before any export starts.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use log::{debug, error};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Pool, Sqlite, SqlitePool};

use crate::error_handling::DatabaseError;

/// Shared handle to the SQLite connection pool.
pub type DbPool = Arc<Pool<Sqlite>>;

/// Opens a read-only connection pool on the configuration database.
///
/// Fails up front if the file is missing or unreadable so that no output
/// file is touched on a bad database path.
pub async fn init_db_pool(db_path: &Path) -> Result<DbPool, DatabaseError> {
    match OpenOptions::new().read(true).open(db_path) {
        Ok(_) => debug!("Configuration database found: {}", db_path.display()),
        Err(ref e) if e.kind() == ErrorKind::NotFound => {
            error!("Configuration database not found: {}", db_path.display());
            return Err(DatabaseError::FileNotFound(db_path.display().to_string()));
        }
        Err(e) => {
            error!("Failed to open configuration database: {e}");
            return Err(DatabaseError::FileAccessError(e.to_string()));
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);

    let pool = SqlitePool::connect_with(options).await.map_err(|e| {
        error!("Failed to connect to database: {e}");
        DatabaseError::SqlError(e)
    })?;

    Ok(Arc::new(pool))
}
