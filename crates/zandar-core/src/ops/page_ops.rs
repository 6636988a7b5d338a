use tracing::debug;

use super::{next_order, ordering, reorder, sorted_by_order, Side, Store};
use crate::errors::{Result, ZandarError};
use crate::model::Page;

/// Create a new Page appended to the end of the tab list
///
/// # Errors
///
/// * `InvalidTitle` - If title is empty or whitespace-only
pub fn create_page(store: &mut Store, title: &str) -> Result<i64> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ZandarError::InvalidTitle);
    }

    let order = next_order(&store.list_pages());
    let page_id = store.add_page(Page::new(title.to_string(), order));

    debug!(page_id, order, "Created page");
    Ok(page_id)
}

/// Rename a Page
///
/// # Errors
///
/// * `PageNotFound` - If the page doesn't exist
/// * `InvalidTitle` - If title is empty or whitespace-only
pub fn rename_page(store: &mut Store, page_id: i64, title: &str) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ZandarError::InvalidTitle);
    }

    let page = store.get_page_mut(page_id)?;
    page.title = title.to_string();
    page.touch();
    Ok(())
}

/// Move a page tab relative to another tab
///
/// Re-reads the current page list, renumbers it densely and writes every
/// new position back. Dropping a tab onto itself, or onto a tab that has
/// vanished since the gesture started, leaves state unchanged.
pub fn reorder_page(store: &mut Store, moving_id: i64, target_id: i64, side: Side) -> Result<()> {
    let ordered = sorted_by_order(store.list_pages());
    let Some(renumbered) = reorder(&ordered, moving_id, target_id, side) else {
        return Ok(());
    };

    for (id, order) in renumbered {
        let page = store.get_page_mut(id)?;
        page.order = order;
        page.touch();
    }

    debug!(moving_id, target_id, "Reordered pages");
    Ok(())
}

/// Delete a Page together with all widgets it owns and their links
///
/// The whole cascade is one unit of work; callers route it through
/// `apply()` so a failure leaves nothing half-deleted.
///
/// # Errors
///
/// * `PageNotFound` - If the page doesn't exist
pub fn delete_page(store: &mut Store, page_id: i64) -> Result<()> {
    store.get_page(page_id)?;

    let widget_ids: Vec<i64> = store
        .widgets_for_page(page_id)
        .iter()
        .map(|w| w.id)
        .collect();

    let mut link_count = 0usize;
    for widget_id in &widget_ids {
        let link_ids: Vec<i64> = store
            .links_for_widget(*widget_id)
            .iter()
            .map(|l| l.id)
            .collect();
        link_count += link_ids.len();
        for link_id in link_ids {
            store.remove_link(link_id);
        }
        store.remove_widget(*widget_id);
    }
    store.remove_page(page_id);

    debug!(
        page_id,
        widgets = widget_ids.len(),
        links = link_count,
        "Cascade-deleted page"
    );
    Ok(())
}

/// List pages in tab order
pub fn list_pages_ordered(store: &Store) -> Vec<&Page> {
    ordering::sorted_by_order(store.list_pages())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_page_appends() {
        let mut store = Store::new();
        let a = create_page(&mut store, "Home").unwrap();
        let b = create_page(&mut store, "Work").unwrap();

        assert_eq!(store.get_page(a).unwrap().order, 0);
        assert_eq!(store.get_page(b).unwrap().order, 1);
    }

    #[test]
    fn test_create_page_rejects_blank_title() {
        let mut store = Store::new();
        assert_eq!(
            create_page(&mut store, "   "),
            Err(ZandarError::InvalidTitle)
        );
    }

    #[test]
    fn test_rename_trims_title() {
        let mut store = Store::new();
        let id = create_page(&mut store, "Home").unwrap();
        rename_page(&mut store, id, "  Personal  ").unwrap();
        assert_eq!(store.get_page(id).unwrap().title, "Personal");
    }

    #[test]
    fn test_reorder_pages_renumbers_densely() {
        let mut store = Store::new();
        let a = create_page(&mut store, "A").unwrap();
        let b = create_page(&mut store, "B").unwrap();
        let c = create_page(&mut store, "C").unwrap();

        reorder_page(&mut store, c, a, Side::Above).unwrap();

        let ordered: Vec<i64> = list_pages_ordered(&store).iter().map(|p| p.id).collect();
        assert_eq!(ordered, vec![c, a, b]);
        let orders: Vec<i64> = list_pages_ordered(&store).iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_vanished_target_is_noop() {
        let mut store = Store::new();
        let a = create_page(&mut store, "A").unwrap();
        create_page(&mut store, "B").unwrap();

        let before = store.clone();
        reorder_page(&mut store, a, 99, Side::Below).unwrap();
        assert_eq!(store, before);
    }
}
