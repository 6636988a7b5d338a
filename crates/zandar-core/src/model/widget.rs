use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title assigned to a widget created without one, and restored when a
/// rename would leave the title empty
pub const DEFAULT_WIDGET_TITLE: &str = "New Widget";

/// Column slot assigned to records that predate the column field
pub const DEFAULT_COLUMN_ID: i64 = 1;

fn default_column_id() -> i64 {
    DEFAULT_COLUMN_ID
}

/// Widget - a collapsible group of links sitting in one column of a page
///
/// A widget belongs to exactly one page and one of its three column slots.
/// Its `order` positions it among the widgets sharing the same
/// (page_id, column_id) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Store-assigned identifier
    pub id: i64,

    /// Externally-portable identifier, preserved across export/import
    pub uuid: Uuid,

    /// Display title shown in the widget header
    pub title: String,

    /// Whether the widget body is currently collapsed
    #[serde(default)]
    pub collapsed: bool,

    /// Owning page (must reference an existing Page)
    pub page_id: i64,

    /// Column slot on the owning page, 1..=3
    #[serde(default = "default_column_id")]
    pub column_id: i64,

    /// Position within the (page_id, column_id) group
    #[serde(default)]
    pub order: i64,

    /// Timestamp when this widget was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this widget was last updated
    pub updated_at: DateTime<Utc>,
}

impl Widget {
    /// Create a new Widget with a fresh uuid and current timestamps
    ///
    /// The id is a placeholder until the store assigns one on insert.
    pub fn new(title: String, page_id: i64, column_id: i64, order: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            uuid: Uuid::new_v4(),
            title,
            collapsed: false,
            page_id,
            column_id,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Normalize fields that older records may carry with out-of-range
    /// values
    ///
    /// Applied once when a record enters the store (hydration or import),
    /// so ordering logic never has to re-check column bounds at use sites.
    pub fn normalize(&mut self) {
        if !(1..=3).contains(&self.column_id) {
            self.column_id = DEFAULT_COLUMN_ID;
        }
    }

    /// Bump the updated_at timestamp to now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
