//! Cascade Delete Tests
//!
//! Verifies cascade completeness and atomicity:
//!
//! 1. Deleting a page removes every owned widget and every link of those
//!    widgets, and nothing else
//! 2. Deleting a widget removes its links and leaves sibling orders alone
//! 3. A failed delete leaves the previous state fully intact

use zandar_core::ops::{link_ops, page_ops, widget_ops};
use zandar_core::{apply, Command, Store, ZandarError};

/// Two pages, each with widgets in two columns and links under them
fn seeded_store() -> (Store, i64, i64) {
    let mut store = Store::new();
    let home = page_ops::create_page(&mut store, "Home").unwrap();
    let work = page_ops::create_page(&mut store, "Work").unwrap();

    for (page, columns) in [(home, [1, 2]), (work, [1, 3])] {
        for column in columns {
            let widget =
                widget_ops::create_widget(&mut store, page, column, Some("W")).unwrap();
            for i in 0..2 {
                link_ops::create_link(
                    &mut store,
                    widget,
                    &format!("L{i}"),
                    &format!("https://l{i}.example"),
                )
                .unwrap();
            }
        }
    }
    (store, home, work)
}

#[test]
fn test_page_delete_cascades_to_widgets_and_links() {
    let (store, home, work) = seeded_store();
    assert_eq!(store.counts(), (2, 4, 8));

    let next = apply(&store, Command::PageDelete { page_id: home }).unwrap();

    // Nothing owned by the deleted page survives
    assert!(next.get_page(home).is_err());
    assert!(next.widgets_for_page(home).is_empty());
    for widget in store.widgets_for_page(home) {
        assert!(next.links_for_widget(widget.id).is_empty());
    }

    // The other page's subtree is untouched
    assert_eq!(next.counts(), (1, 2, 4));
    assert_eq!(next.widgets_for_page(work).len(), 2);
}

#[test]
fn test_widget_delete_removes_only_its_links() {
    let mut store = Store::new();
    let page = page_ops::create_page(&mut store, "Home").unwrap();
    let victim = widget_ops::create_widget(&mut store, page, 1, Some("Victim")).unwrap();
    let sibling = widget_ops::create_widget(&mut store, page, 1, Some("Sibling")).unwrap();

    link_ops::create_link(&mut store, victim, "A", "https://a.example").unwrap();
    link_ops::create_link(&mut store, victim, "B", "https://b.example").unwrap();
    let kept = link_ops::create_link(&mut store, sibling, "C", "https://c.example").unwrap();
    let sibling_order = store.get_widget(sibling).unwrap().order;

    widget_ops::delete_widget(&mut store, victim).unwrap();

    assert!(store.get_widget(victim).is_err());
    assert!(store.links_for_widget(victim).is_empty());
    // Sibling widget and its link are untouched, order included
    assert_eq!(store.get_widget(sibling).unwrap().order, sibling_order);
    assert!(store.get_link(kept).is_ok());
}

#[test]
fn test_delete_missing_page_fails_without_side_effects() {
    let (store, _, _) = seeded_store();

    let result = apply(&store, Command::PageDelete { page_id: 99 });

    assert_eq!(result, Err(ZandarError::PageNotFound { page_id: 99 }));
    assert_eq!(store.counts(), (2, 4, 8));
}

#[test]
fn test_empty_page_delete() {
    let mut store = Store::new();
    let page = page_ops::create_page(&mut store, "Empty").unwrap();
    page_ops::delete_page(&mut store, page).unwrap();
    assert_eq!(store.counts(), (0, 0, 0));
}
