use tracing::debug;

use super::{next_order, reorder, sorted_by_order, Side, Store};
use crate::errors::{Result, ZandarError};
use crate::favicon::normalize_url;
use crate::model::Link;

/// Create a new Link at the end of a widget's list
///
/// The URL is normalized to carry a scheme before it is stored.
///
/// # Errors
///
/// * `WidgetNotFound` - If the owning widget doesn't exist
/// * `InvalidName` - If name is empty or whitespace-only
/// * `InvalidUrl` - If url is empty
pub fn create_link(store: &mut Store, widget_id: i64, name: &str, url: &str) -> Result<i64> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ZandarError::InvalidName);
    }
    let url = url.trim();
    if url.is_empty() {
        return Err(ZandarError::InvalidUrl);
    }
    store.get_widget(widget_id)?;

    let order = next_order(&store.links_for_widget(widget_id));
    let link_id = store.add_link(Link::new(
        name.to_string(),
        normalize_url(url),
        widget_id,
        order,
    ));

    debug!(link_id, widget_id, order, "Created link");
    Ok(link_id)
}

/// Move a link relative to a sibling inside its current widget
///
/// The widget's link list is re-read from the store at call time and
/// densely renumbered. Dropping onto itself, or onto a link that has
/// vanished, leaves state unchanged.
pub fn reorder_link(store: &mut Store, moving_id: i64, target_id: i64, side: Side) -> Result<()> {
    let Ok(moving) = store.get_link(moving_id) else {
        return Ok(());
    };
    let widget_id = moving.widget_id;

    let ordered = sorted_by_order(store.links_for_widget(widget_id));
    let Some(renumbered) = reorder(&ordered, moving_id, target_id, side) else {
        return Ok(());
    };

    for (id, order) in renumbered {
        let link = store.get_link_mut(id)?;
        link.order = order;
        link.touch();
    }

    debug!(moving_id, target_id, widget_id, "Reordered links");
    Ok(())
}

/// Move a link into another widget
///
/// With no drop target the link is appended to the destination list; with
/// a target it is inserted relative to that sibling and the destination
/// list is densely renumbered. The source widget's list keeps its holes.
///
/// A vanished link or destination widget degrades to a no-op; a vanished
/// target degrades to an append.
pub fn move_link_to_widget(
    store: &mut Store,
    link_id: i64,
    widget_id: i64,
    target: Option<(i64, Side)>,
) -> Result<()> {
    if store.get_widget(widget_id).is_err() {
        return Ok(());
    }
    let Ok(link) = store.get_link(link_id) else {
        return Ok(());
    };
    let same_widget = link.widget_id == widget_id;

    if let Some((target_id, _)) = target {
        if target_id == link_id && same_widget {
            return Ok(());
        }
    }

    {
        let link = store.get_link_mut(link_id)?;
        link.widget_id = widget_id;
        link.touch();
    }

    let positioned = if let Some((target_id, side)) = target {
        let ordered = sorted_by_order(store.links_for_widget(widget_id));
        if let Some(renumbered) = reorder(&ordered, link_id, target_id, side) {
            for (id, order) in renumbered {
                let sibling = store.get_link_mut(id)?;
                sibling.order = order;
                sibling.touch();
            }
            true
        } else {
            false
        }
    } else {
        false
    };

    if !positioned {
        let destination: Vec<&Link> = store
            .links_for_widget(widget_id)
            .into_iter()
            .filter(|l| l.id != link_id)
            .collect();
        let order = next_order(&destination);
        store.get_link_mut(link_id)?.order = order;
    }

    debug!(link_id, widget_id, "Moved link across widgets");
    Ok(())
}

/// Delete a Link
///
/// # Errors
///
/// * `LinkNotFound` - If the link doesn't exist
pub fn delete_link(store: &mut Store, link_id: i64) -> Result<()> {
    store.get_link(link_id)?;
    store.remove_link(link_id);
    debug!(link_id, "Deleted link");
    Ok(())
}

/// List a widget's links in display order
pub fn links_for_widget_ordered(store: &Store, widget_id: i64) -> Vec<&Link> {
    sorted_by_order(store.links_for_widget(widget_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{page_ops, widget_ops};

    fn store_with_widget() -> (Store, i64) {
        let mut store = Store::new();
        let page_id = page_ops::create_page(&mut store, "Home").unwrap();
        let widget_id = widget_ops::create_widget(&mut store, page_id, 1, Some("W")).unwrap();
        (store, widget_id)
    }

    #[test]
    fn test_create_link_normalizes_url() {
        let (mut store, widget_id) = store_with_widget();
        let id = create_link(&mut store, widget_id, "Docs", "docs.rs").unwrap();
        assert_eq!(store.get_link(id).unwrap().url, "https://docs.rs");
    }

    #[test]
    fn test_create_link_appends() {
        let (mut store, widget_id) = store_with_widget();
        let a = create_link(&mut store, widget_id, "A", "https://a.example").unwrap();
        let b = create_link(&mut store, widget_id, "B", "https://b.example").unwrap();
        assert_eq!(store.get_link(a).unwrap().order, 0);
        assert_eq!(store.get_link(b).unwrap().order, 1);
    }

    #[test]
    fn test_create_link_validates_inputs() {
        let (mut store, widget_id) = store_with_widget();
        assert_eq!(
            create_link(&mut store, widget_id, " ", "https://a.example"),
            Err(ZandarError::InvalidName)
        );
        assert_eq!(
            create_link(&mut store, widget_id, "A", ""),
            Err(ZandarError::InvalidUrl)
        );
    }

    #[test]
    fn test_reorder_link_within_widget() {
        let (mut store, widget_id) = store_with_widget();
        let a = create_link(&mut store, widget_id, "A", "https://a.example").unwrap();
        let b = create_link(&mut store, widget_id, "B", "https://b.example").unwrap();
        let c = create_link(&mut store, widget_id, "C", "https://c.example").unwrap();

        reorder_link(&mut store, a, c, Side::Below).unwrap();

        let ids: Vec<i64> = links_for_widget_ordered(&store, widget_id)
            .iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec![b, c, a]);
    }

    #[test]
    fn test_move_link_to_other_widget_appends() {
        let (mut store, widget_a) = store_with_widget();
        let page_id = store.get_widget(widget_a).unwrap().page_id;
        let widget_b = widget_ops::create_widget(&mut store, page_id, 2, Some("B")).unwrap();

        let l1 = create_link(&mut store, widget_a, "One", "https://one.example").unwrap();
        let l2 = create_link(&mut store, widget_b, "Two", "https://two.example").unwrap();

        move_link_to_widget(&mut store, l1, widget_b, None).unwrap();

        let moved = store.get_link(l1).unwrap();
        assert_eq!(moved.widget_id, widget_b);
        assert_eq!(moved.order, store.get_link(l2).unwrap().order + 1);
        assert!(store.links_for_widget(widget_a).is_empty());
    }

    #[test]
    fn test_move_link_to_missing_widget_is_noop() {
        let (mut store, widget_id) = store_with_widget();
        let link = create_link(&mut store, widget_id, "A", "https://a.example").unwrap();

        let before = store.clone();
        move_link_to_widget(&mut store, link, 99, None).unwrap();
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_link_leaves_siblings() {
        let (mut store, widget_id) = store_with_widget();
        let a = create_link(&mut store, widget_id, "A", "https://a.example").unwrap();
        let b = create_link(&mut store, widget_id, "B", "https://b.example").unwrap();
        let b_order = store.get_link(b).unwrap().order;

        delete_link(&mut store, a).unwrap();

        assert!(store.get_link(a).is_err());
        assert_eq!(store.get_link(b).unwrap().order, b_order);
    }
}
