//! Backup Codec Tests
//!
//! Verifies the snapshot compatibility surface:
//!
//! 1. serialize -> deserialize round-trips full field equality, for empty
//!    and non-empty stores
//! 2. The version gate always rejects foreign versions, store unchanged
//! 3. Structural failures are reported as their own error kind
//! 4. Replace-restore is atomic through the apply() boundary

use zandar_core::backup::{self, BACKUP_VERSION};
use zandar_core::ops::{link_ops, page_ops, widget_ops};
use zandar_core::{apply, Command, Store, ZandarError};

fn populated_store() -> Store {
    let mut store = Store::new();
    let home = page_ops::create_page(&mut store, "Home").unwrap();
    let work = page_ops::create_page(&mut store, "Work").unwrap();
    let tools = widget_ops::create_widget(&mut store, home, 1, Some("Tools")).unwrap();
    let news = widget_ops::create_widget(&mut store, home, 2, Some("News")).unwrap();
    widget_ops::create_widget(&mut store, work, 1, Some("Tickets")).unwrap();
    link_ops::create_link(&mut store, tools, "Docs", "docs.rs").unwrap();
    link_ops::create_link(&mut store, tools, "Crates", "https://crates.io").unwrap();
    link_ops::create_link(&mut store, news, "Lobsters", "lobste.rs").unwrap();
    store
}

#[test]
fn test_round_trip_preserves_every_field() {
    let source = populated_store();

    let json = backup::export::to_json(&backup::serialize(&source)).unwrap();
    let document = backup::deserialize(&json).unwrap();

    let mut target = Store::new();
    backup::restore_replace(&mut target, &document).unwrap();

    assert_eq!(target.list_pages(), source.list_pages());
    assert_eq!(target.list_widgets(), source.list_widgets());
    assert_eq!(target.list_links(), source.list_links());
}

#[test]
fn test_round_trip_empty_store() {
    let source = Store::new();
    let json = backup::export::to_json(&backup::serialize(&source)).unwrap();
    let document = backup::deserialize(&json).unwrap();

    let mut target = populated_store();
    backup::restore_replace(&mut target, &document).unwrap();
    assert_eq!(target.counts(), (0, 0, 0));
}

#[test]
fn test_version_gate_rejects_and_leaves_store_unchanged() {
    let store = populated_store();

    // A document exported by some older build
    let mut value: serde_json::Value =
        serde_json::from_str(&backup::export::to_json(&backup::serialize(&store)).unwrap())
            .unwrap();
    value["version"] = serde_json::json!("0.9");
    let raw = value.to_string();

    let result = backup::deserialize(&raw);
    assert_eq!(
        result,
        Err(ZandarError::VersionMismatch {
            expected: BACKUP_VERSION.to_string(),
            found: "0.9".to_string(),
        })
    );

    // Nothing was imported
    assert_eq!(store.counts(), (2, 3, 3));
}

#[test]
fn test_structural_and_parse_failures_are_distinct() {
    assert!(matches!(
        backup::deserialize("{{{"),
        Err(ZandarError::Serialization { .. })
    ));
    assert!(matches!(
        backup::deserialize("[1, 2, 3]"),
        Err(ZandarError::Structural { .. })
    ));
    assert!(matches!(
        backup::deserialize(r#"{"version": "1.0"}"#),
        Err(ZandarError::Structural { .. })
    ));
    // data.links present but not a list
    let raw = r#"{
        "version": "1.0",
        "timestamp": "2024-01-01T00:00:00Z",
        "appIdentifier": "Zandar",
        "data": {"pages": [], "widgets": [], "links": 7},
        "metadata": {"totalPages": 0, "totalWidgets": 0, "totalLinks": 0}
    }"#;
    assert!(matches!(
        backup::deserialize(raw),
        Err(ZandarError::Structural { .. })
    ));
}

#[test]
fn test_failed_restore_never_partially_imports() {
    let store = populated_store();

    // Duplicate page ids must be caught before anything is cleared
    let mut document = backup::serialize(&store);
    let duplicate = document.data.pages[0].clone();
    document.data.pages.push(duplicate);

    let result = apply(
        &store,
        Command::RestoreReplace {
            document: Box::new(document),
        },
    );

    assert!(matches!(result, Err(ZandarError::Structural { .. })));
    // The caller's store is fully intact, not half-cleared
    assert_eq!(store.counts(), (2, 3, 3));
    assert!(store.find_page_by_title("Home").is_some());
}

#[test]
fn test_restore_replaces_previous_contents() {
    let source = populated_store();
    let document = backup::serialize(&source);

    let mut target = Store::new();
    page_ops::create_page(&mut target, "Doomed").unwrap();

    let stats = backup::restore_replace(&mut target, &document).unwrap();
    assert_eq!(stats.pages_imported, 2);
    assert_eq!(stats.widgets_imported, 3);
    assert_eq!(stats.links_imported, 3);
    assert!(target.find_page_by_title("Doomed").is_none());
}

#[test]
fn test_legacy_records_normalized_on_import() {
    // Hand-built document with records that predate the column field
    let raw = r#"{
        "version": "1.0",
        "timestamp": "2024-01-01T00:00:00Z",
        "appIdentifier": "Zandar",
        "data": {
            "pages": [{
                "id": 1,
                "uuid": "0d9f4df8-66e4-4c2a-8f4a-2e9a1b3c5d7e",
                "title": "Home",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }],
            "widgets": [{
                "id": 1,
                "uuid": "4a1b2c3d-5e6f-4a8b-9c0d-1e2f3a4b5c6d",
                "title": "Old",
                "pageId": 1,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }],
            "links": []
        },
        "metadata": {"totalPages": 1, "totalWidgets": 1, "totalLinks": 0}
    }"#;

    let document = backup::deserialize(raw).unwrap();
    let mut store = Store::new();
    backup::restore_replace(&mut store, &document).unwrap();

    let widget = store.get_widget(1).unwrap();
    assert_eq!(widget.column_id, 1);
    assert_eq!(widget.order, 0);
    assert!(!widget.collapsed);
    // The page tab list gained a default order as well
    assert_eq!(store.get_page(1).unwrap().order, 0);
}
