//! Backup document codec
//!
//! Serializes the full Page/Widget/Link hierarchy into a versioned,
//! self-describing JSON document and validates/restores it back. The
//! version string is the sole compatibility gate: a mismatch is a hard
//! error, never coerced.

pub mod document;
pub mod export;
pub mod import;

pub use document::{
    BackupData, BackupDocument, BackupMetadata, APP_IDENTIFIER, BACKUP_VERSION, FILE_PREFIX,
};
pub use export::{backup_filename, serialize, statistics, DatabaseStats};
pub use import::{deserialize, restore_replace, ImportStats};
