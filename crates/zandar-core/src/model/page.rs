use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Page - a named tab owning an ordered set of widgets
///
/// Pages are the top level of the hierarchy. Each page owns the widgets that
/// reference it via `page_id`; deleting a page cascades to those widgets and
/// their links.
///
/// Fields serialize in camelCase because the struct doubles as the wire
/// record inside backup documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Store-assigned identifier, stable for the lifetime of the record
    pub id: i64,

    /// Externally-portable identifier, preserved across export/import
    pub uuid: Uuid,

    /// Display title shown on the page tab
    pub title: String,

    /// Position in the page tab list (dense 0..n-1 after any reorder)
    #[serde(default)]
    pub order: i64,

    /// Timestamp when this page was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this page was last updated
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Create a new Page with a fresh uuid and current timestamps
    ///
    /// The id is a placeholder until the store assigns one on insert.
    pub fn new(title: String, order: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            uuid: Uuid::new_v4(),
            title,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page() {
        let page = Page::new("Home".to_string(), 0);
        assert_eq!(page.id, 0);
        assert_eq!(page.title, "Home");
        assert_eq!(page.order, 0);
        assert_eq!(page.created_at, page.updated_at);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::new("Home".to_string(), 0);
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
