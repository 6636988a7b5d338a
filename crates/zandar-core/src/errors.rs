//! Error taxonomy for Zandar core operations
//!
//! Every fallible operation in this crate returns [`ZandarError`]. Each
//! variant carries enough context to be reported to the user as-is, and
//! maps to a stable error code via [`ZandarError::code`] for programmatic
//! handling at the presentation boundary.

use thiserror::Error;

/// Result type alias using ZandarError
pub type Result<T> = std::result::Result<T, ZandarError>;

/// Comprehensive error taxonomy for Zandar operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZandarError {
    // ===== Validation Errors =====
    /// Title input was empty or whitespace-only where a title is required
    #[error("Title cannot be empty or whitespace-only")]
    InvalidTitle,

    /// Link name input was empty or whitespace-only
    #[error("Link name cannot be empty or whitespace-only")]
    InvalidName,

    /// Link URL input was empty
    #[error("Link URL cannot be empty")]
    InvalidUrl,

    /// Column slot outside the supported 1..=3 range
    #[error("Column {column_id} is out of range (expected 1..=3)")]
    InvalidColumn { column_id: i64 },

    // ===== Structural Errors =====
    /// Backup document does not have the required shape
    #[error("Invalid backup file format: {reason}")]
    Structural { reason: String },

    /// Backup document declares an unsupported format version
    #[error("Incompatible backup version: expected {expected}, got {found}")]
    VersionMismatch { expected: String, found: String },

    // ===== Not-Found Errors =====
    /// Page not found in store
    #[error("Page not found: {page_id}")]
    PageNotFound { page_id: i64 },

    /// Widget not found in store
    #[error("Widget not found: {widget_id}")]
    WidgetNotFound { widget_id: i64 },

    /// Link not found in store
    #[error("Link not found: {link_id}")]
    LinkNotFound { link_id: i64 },

    // ===== Integration/IO Errors =====
    /// Raw input could not be parsed as JSON
    #[error("Backup file is not valid JSON: {reason}")]
    Serialization { reason: String },

    /// Underlying storage transaction failed or was aborted
    #[error("Storage failure: {reason}")]
    Storage { reason: String },
}

impl ZandarError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ZandarError::InvalidTitle => "ERR_INVALID_TITLE",
            ZandarError::InvalidName => "ERR_INVALID_NAME",
            ZandarError::InvalidUrl => "ERR_INVALID_URL",
            ZandarError::InvalidColumn { .. } => "ERR_INVALID_COLUMN",
            ZandarError::Structural { .. } => "ERR_STRUCTURAL",
            ZandarError::VersionMismatch { .. } => "ERR_VERSION_MISMATCH",
            ZandarError::PageNotFound { .. } => "ERR_PAGE_NOT_FOUND",
            ZandarError::WidgetNotFound { .. } => "ERR_WIDGET_NOT_FOUND",
            ZandarError::LinkNotFound { .. } => "ERR_LINK_NOT_FOUND",
            ZandarError::Serialization { .. } => "ERR_SERIALIZATION",
            ZandarError::Storage { .. } => "ERR_STORAGE",
        }
    }

    /// Whether this error is one of the not-found kinds
    ///
    /// Ordering operations degrade to a no-op on these instead of surfacing
    /// them to the user (the gesture simply leaves state unchanged).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ZandarError::PageNotFound { .. }
                | ZandarError::WidgetNotFound { .. }
                | ZandarError::LinkNotFound { .. }
        )
    }
}
