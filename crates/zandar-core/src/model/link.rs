use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Link - a single bookmark owned by one widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Store-assigned identifier
    pub id: i64,

    /// Externally-portable identifier, preserved across export/import
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Target URL, normalized to include a scheme at creation time
    pub url: String,

    /// Owning widget (must reference an existing Widget)
    pub widget_id: i64,

    /// Position within the owning widget's link list
    #[serde(default)]
    pub order: i64,

    /// Timestamp when this link was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this link was last updated
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Create a new Link with a fresh uuid and current timestamps
    ///
    /// The id is a placeholder until the store assigns one on insert.
    /// Callers are expected to pass an already-normalized URL.
    pub fn new(name: String, url: String, widget_id: i64, order: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            uuid: Uuid::new_v4(),
            name,
            url,
            widget_id,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the updated_at timestamp to now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
