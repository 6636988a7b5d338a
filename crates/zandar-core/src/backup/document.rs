use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Link, Page, Widget};

/// Format version a document must declare exactly to be importable
pub const BACKUP_VERSION: &str = "1.0";

/// Constant identifying which application produced a document
pub const APP_IDENTIFIER: &str = "Zandar";

/// Leading component of generated export filenames
pub const FILE_PREFIX: &str = "zandar-backup";

/// The three record collections of a snapshot
///
/// All three keys must be present in a document; empty lists are valid,
/// missing keys are not (enforced by `import::deserialize` before this
/// type ever sees the data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupData {
    pub pages: Vec<Page>,
    pub widgets: Vec<Widget>,
    pub links: Vec<Link>,
}

/// Per-collection record counts carried alongside the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupMetadata {
    pub total_pages: usize,
    pub total_widgets: usize,
    pub total_links: usize,
}

/// Versioned snapshot envelope - the bit-exact compatibility surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    /// Format version; compared for exact equality against
    /// [`BACKUP_VERSION`] on import
    pub version: String,

    /// Instant the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Producing application, always [`APP_IDENTIFIER`]
    pub app_identifier: String,

    /// The full record set
    pub data: BackupData,

    /// Collection counts at snapshot time
    pub metadata: BackupMetadata,
}
