//! Error handling for zandar-store
//!
//! Maps rusqlite failures onto the core `Storage` error kind so the
//! presentation layer sees one taxonomy.

use zandar_core::errors::ZandarError;

/// Result type alias using the core error taxonomy
pub type Result<T> = std::result::Result<T, ZandarError>;

/// Create a storage error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ZandarError {
    ZandarError::Storage {
        reason: err.to_string(),
    }
}

/// Create a storage error for a failed migration
pub fn migration_error(migration_id: &str, reason: &str) -> ZandarError {
    ZandarError::Storage {
        reason: format!("Migration {migration_id} failed: {reason}"),
    }
}
