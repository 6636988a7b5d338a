use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use super::document::{BackupDocument, BACKUP_VERSION};
use crate::errors::{Result, ZandarError};
use crate::ops::Store;

/// Per-collection record counts of a completed restore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    pub pages_imported: usize,
    pub widgets_imported: usize,
    pub links_imported: usize,
}

/// Parse and validate a raw backup document
///
/// Validation happens in layers so each failure mode surfaces as its own
/// error kind:
///
/// 1. Not valid JSON at all -> `Serialization`
/// 2. Not an object, or `version` absent -> `Structural`
/// 3. Declared version differs from [`BACKUP_VERSION`] -> `VersionMismatch`
///    (always fatal, never auto-upgraded)
/// 4. `data` absent, or any of the three collections missing or not a
///    list -> `Structural` (empty lists are valid)
/// 5. Record-level field errors -> `Serialization`
pub fn deserialize(raw: &str) -> Result<BackupDocument> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ZandarError::Serialization {
            reason: e.to_string(),
        })?;

    let object = value.as_object().ok_or_else(|| ZandarError::Structural {
        reason: "backup document must be a JSON object".to_string(),
    })?;

    let version = object
        .get("version")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ZandarError::Structural {
            reason: "backup document is missing the version field".to_string(),
        })?;
    if version != BACKUP_VERSION {
        return Err(ZandarError::VersionMismatch {
            expected: BACKUP_VERSION.to_string(),
            found: version.to_string(),
        });
    }

    let data = object
        .get("data")
        .and_then(|v| v.as_object())
        .ok_or_else(|| ZandarError::Structural {
            reason: "backup document is missing the data object".to_string(),
        })?;
    for collection in ["pages", "widgets", "links"] {
        let present = data.get(collection).is_some_and(|v| v.is_array());
        if !present {
            return Err(ZandarError::Structural {
                reason: format!("data.{collection} must be present as a list"),
            });
        }
    }

    let document: BackupDocument =
        serde_json::from_value(value).map_err(|e| ZandarError::Serialization {
            reason: e.to_string(),
        })?;

    debug!(
        version = %document.version,
        pages = document.data.pages.len(),
        widgets = document.data.widgets.len(),
        links = document.data.links.len(),
        "Validated backup document"
    );
    Ok(document)
}

fn ensure_unique_ids(kind: &str, ids: impl Iterator<Item = i64>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ZandarError::Structural {
                reason: format!("duplicate {kind} id {id} in backup data"),
            });
        }
    }
    Ok(())
}

/// Replace the store's entire contents with a validated document
///
/// All three tables are cleared and the snapshot's records bulk-inserted
/// with ids, uuids, orders and timestamps preserved verbatim; nothing is
/// re-derived. Id counters advance past the imported ids.
///
/// Every record-level check runs before the clear, so an error leaves the
/// store exactly as it was - atomic on its own, without relying on the
/// caller's `apply()` copy or durable transaction.
///
/// # Errors
///
/// * `Structural` - If a collection carries duplicate ids
pub fn restore_replace(store: &mut Store, document: &BackupDocument) -> Result<ImportStats> {
    ensure_unique_ids("page", document.data.pages.iter().map(|p| p.id))?;
    ensure_unique_ids("widget", document.data.widgets.iter().map(|w| w.id))?;
    ensure_unique_ids("link", document.data.links.iter().map(|l| l.id))?;

    store.clear_all();

    for page in &document.data.pages {
        store.insert_page(page.clone());
    }
    for widget in &document.data.widgets {
        let mut widget = widget.clone();
        widget.normalize();
        store.insert_widget(widget);
    }
    for link in &document.data.links {
        store.insert_link(link.clone());
    }

    let stats = ImportStats {
        pages_imported: document.data.pages.len(),
        widgets_imported: document.data.widgets.len(),
        links_imported: document.data.links.len(),
    };
    info!(
        pages = stats.pages_imported,
        widgets = stats.widgets_imported,
        links = stats.links_imported,
        "Restored store from backup"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::export;
    use crate::ops::page_ops;

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result = deserialize("not json at all");
        assert!(matches!(result, Err(ZandarError::Serialization { .. })));
    }

    #[test]
    fn test_deserialize_rejects_missing_version() {
        let result = deserialize(r#"{"data": {"pages": [], "widgets": [], "links": []}}"#);
        assert!(matches!(result, Err(ZandarError::Structural { .. })));
    }

    #[test]
    fn test_deserialize_rejects_wrong_version() {
        let raw = r#"{
            "version": "0.9",
            "timestamp": "2024-01-01T00:00:00Z",
            "appIdentifier": "Zandar",
            "data": {"pages": [], "widgets": [], "links": []},
            "metadata": {"totalPages": 0, "totalWidgets": 0, "totalLinks": 0}
        }"#;
        assert_eq!(
            deserialize(raw),
            Err(ZandarError::VersionMismatch {
                expected: "1.0".to_string(),
                found: "0.9".to_string(),
            })
        );
    }

    #[test]
    fn test_deserialize_requires_all_collections() {
        let raw = r#"{
            "version": "1.0",
            "timestamp": "2024-01-01T00:00:00Z",
            "appIdentifier": "Zandar",
            "data": {"pages": [], "widgets": []},
            "metadata": {"totalPages": 0, "totalWidgets": 0, "totalLinks": 0}
        }"#;
        assert!(matches!(
            deserialize(raw),
            Err(ZandarError::Structural { .. })
        ));
    }

    #[test]
    fn test_restore_preserves_ids_and_counters() {
        let mut source = Store::new();
        page_ops::create_page(&mut source, "Home").unwrap();
        page_ops::create_page(&mut source, "Work").unwrap();
        let doc = export::serialize(&source);

        let mut target = Store::new();
        let stats = restore_replace(&mut target, &doc).unwrap();
        assert_eq!(stats.pages_imported, 2);
        assert_eq!(target.get_page(1).unwrap().title, "Home");

        // New records must not collide with restored ids
        let fresh = page_ops::create_page(&mut target, "Fresh").unwrap();
        assert_eq!(fresh, 3);
    }

    #[test]
    fn test_restore_with_duplicate_ids_leaves_target_untouched() {
        let mut source = Store::new();
        page_ops::create_page(&mut source, "Home").unwrap();
        let mut doc = export::serialize(&source);
        let duplicate = doc.data.pages[0].clone();
        doc.data.pages.push(duplicate);

        // Mutating the target directly, with no apply() copy in between
        let mut target = Store::new();
        page_ops::create_page(&mut target, "Existing").unwrap();

        let result = restore_replace(&mut target, &doc);
        assert!(matches!(result, Err(ZandarError::Structural { .. })));
        assert_eq!(target.counts(), (1, 0, 0));
        assert!(target.find_page_by_title("Existing").is_some());
    }
}
