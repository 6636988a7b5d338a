use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use tracing::debug;

use super::document::{
    BackupData, BackupDocument, BackupMetadata, BACKUP_VERSION, FILE_PREFIX,
};
use crate::errors::{Result, ZandarError};
use crate::ops::Store;

/// Current record counts per collection, for lightweight UI feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatabaseStats {
    pub pages: usize,
    pub widgets: usize,
    pub links: usize,
    pub total: usize,
}

/// Count records without producing a full document
pub fn statistics(store: &Store) -> DatabaseStats {
    let (pages, widgets, links) = store.counts();
    DatabaseStats {
        pages,
        widgets,
        links,
        total: pages + widgets + links,
    }
}

/// Wrap a point-in-time read of the whole store into a backup document
///
/// The store reference is a consistent joint view of all three collections;
/// the durable exporter obtains one by reading inside a single transaction.
/// Records are emitted in id order so identical states produce identical
/// documents.
pub fn serialize(store: &Store) -> BackupDocument {
    let pages: Vec<_> = store.list_pages().into_iter().cloned().collect();
    let widgets: Vec<_> = store.list_widgets().into_iter().cloned().collect();
    let links: Vec<_> = store.list_links().into_iter().cloned().collect();

    let metadata = BackupMetadata {
        total_pages: pages.len(),
        total_widgets: widgets.len(),
        total_links: links.len(),
    };

    debug!(
        pages = metadata.total_pages,
        widgets = metadata.total_widgets,
        links = metadata.total_links,
        "Serialized backup document"
    );

    BackupDocument {
        version: BACKUP_VERSION.to_string(),
        timestamp: Utc::now(),
        app_identifier: super::document::APP_IDENTIFIER.to_string(),
        data: BackupData {
            pages,
            widgets,
            links,
        },
        metadata,
    }
}

/// Render a document as pretty-printed JSON
pub fn to_json(document: &BackupDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(|e| ZandarError::Serialization {
        reason: e.to_string(),
    })
}

/// Export filename for a backup taken at `now`
///
/// Locale-style timestamp with every separator replaced by `-`, e.g.
/// `zandar-backup-01-31-2026-09-30-05-PM.json`.
pub fn backup_filename(now: DateTime<Local>) -> String {
    format!("{}-{}.json", FILE_PREFIX, now.format("%m-%d-%Y-%I-%M-%S-%p"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{link_ops, page_ops, widget_ops};
    use chrono::TimeZone;

    #[test]
    fn test_statistics_counts_everything() {
        let mut store = Store::new();
        let page = page_ops::create_page(&mut store, "Home").unwrap();
        let widget = widget_ops::create_widget(&mut store, page, 1, None).unwrap();
        link_ops::create_link(&mut store, widget, "A", "https://a.example").unwrap();

        let stats = statistics(&store);
        assert_eq!(stats.pages, 1);
        assert_eq!(stats.widgets, 1);
        assert_eq!(stats.links, 1);
        assert_eq!(stats.total, 3);
    }

    #[test]
    fn test_serialize_fills_metadata() {
        let mut store = Store::new();
        let page = page_ops::create_page(&mut store, "Home").unwrap();
        widget_ops::create_widget(&mut store, page, 1, None).unwrap();

        let doc = serialize(&store);
        assert_eq!(doc.version, BACKUP_VERSION);
        assert_eq!(doc.app_identifier, "Zandar");
        assert_eq!(doc.metadata.total_pages, 1);
        assert_eq!(doc.metadata.total_widgets, 1);
        assert_eq!(doc.metadata.total_links, 0);
    }

    #[test]
    fn test_backup_filename_has_no_separator_chars() {
        let at = Local.with_ymd_and_hms(2026, 1, 31, 21, 30, 5).unwrap();
        let name = backup_filename(at);
        assert_eq!(name, "zandar-backup-01-31-2026-09-30-05-PM.json");
        let stem = name.trim_end_matches(".json");
        assert!(!stem.contains([':', '/', ',', ' ']));
    }
}
