use tracing::debug;

use super::{next_order, reorder, sorted_by_order, Side, Store};
use crate::errors::{Result, ZandarError};
use crate::model::{Widget, DEFAULT_WIDGET_TITLE};

/// Create a new Widget at the end of a page column
///
/// A missing title falls back to the fixed default label.
///
/// # Errors
///
/// * `PageNotFound` - If the owning page doesn't exist
/// * `InvalidColumn` - If column_id is outside 1..=3
pub fn create_widget(
    store: &mut Store,
    page_id: i64,
    column_id: i64,
    title: Option<&str>,
) -> Result<i64> {
    if !(1..=3).contains(&column_id) {
        return Err(ZandarError::InvalidColumn { column_id });
    }
    store.get_page(page_id)?;

    let title = match title.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => DEFAULT_WIDGET_TITLE.to_string(),
    };

    let order = next_order(&store.widgets_in_column(page_id, column_id));
    let widget_id = store.add_widget(Widget::new(title, page_id, column_id, order));

    debug!(widget_id, page_id, column_id, order, "Created widget");
    Ok(widget_id)
}

/// Rename a Widget
///
/// An empty or whitespace-only title resets the widget to the default
/// label instead of persisting an empty string.
///
/// # Errors
///
/// * `WidgetNotFound` - If the widget doesn't exist
pub fn rename_widget(store: &mut Store, widget_id: i64, title: &str) -> Result<()> {
    let widget = store.get_widget_mut(widget_id)?;
    let trimmed = title.trim();
    widget.title = if trimmed.is_empty() {
        DEFAULT_WIDGET_TITLE.to_string()
    } else {
        trimmed.to_string()
    };
    widget.touch();
    Ok(())
}

/// Set a Widget's collapsed flag
///
/// # Errors
///
/// * `WidgetNotFound` - If the widget doesn't exist
pub fn set_collapsed(store: &mut Store, widget_id: i64, collapsed: bool) -> Result<()> {
    let widget = store.get_widget_mut(widget_id)?;
    widget.collapsed = collapsed;
    widget.touch();
    Ok(())
}

/// Move a widget relative to a sibling in its current (page, column) group
///
/// Group membership is re-read from the store at call time, never from a
/// view captured when the drag began. Dropping onto itself, or onto a
/// sibling that has vanished, leaves state unchanged.
pub fn reorder_widget(store: &mut Store, moving_id: i64, target_id: i64, side: Side) -> Result<()> {
    let Ok(moving) = store.get_widget(moving_id) else {
        return Ok(());
    };
    let (page_id, column_id) = (moving.page_id, moving.column_id);

    let ordered = sorted_by_order(store.widgets_in_column(page_id, column_id));
    let Some(renumbered) = reorder(&ordered, moving_id, target_id, side) else {
        return Ok(());
    };

    for (id, order) in renumbered {
        let widget = store.get_widget_mut(id)?;
        widget.order = order;
        widget.touch();
    }

    debug!(moving_id, target_id, page_id, column_id, "Reordered widgets");
    Ok(())
}

/// Move a widget into another column of its page
///
/// With no drop target the widget is appended to the destination column's
/// end; with a target it is inserted relative to that sibling and the
/// destination group is densely renumbered. The source column is not
/// renumbered - holes are tolerated there because ordering only ever needs
/// the relative sequence.
///
/// A vanished widget degrades to a no-op; a vanished target degrades to an
/// append.
///
/// # Errors
///
/// * `InvalidColumn` - If column_id is outside 1..=3
pub fn move_widget_to_column(
    store: &mut Store,
    widget_id: i64,
    column_id: i64,
    target: Option<(i64, Side)>,
) -> Result<()> {
    if !(1..=3).contains(&column_id) {
        return Err(ZandarError::InvalidColumn { column_id });
    }
    let Ok(widget) = store.get_widget(widget_id) else {
        return Ok(());
    };
    let page_id = widget.page_id;
    let same_column = widget.column_id == column_id;

    if let Some((target_id, _)) = target {
        if target_id == widget_id && same_column {
            return Ok(());
        }
    }

    {
        let widget = store.get_widget_mut(widget_id)?;
        widget.column_id = column_id;
        widget.touch();
    }

    let positioned = if let Some((target_id, side)) = target {
        let ordered = sorted_by_order(store.widgets_in_column(page_id, column_id));
        if let Some(renumbered) = reorder(&ordered, widget_id, target_id, side) {
            for (id, order) in renumbered {
                let sibling = store.get_widget_mut(id)?;
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
        let destination: Vec<&Widget> = store
            .widgets_in_column(page_id, column_id)
            .into_iter()
            .filter(|w| w.id != widget_id)
            .collect();
        let order = next_order(&destination);
        store.get_widget_mut(widget_id)?.order = order;
    }

    debug!(widget_id, page_id, column_id, "Moved widget across columns");
    Ok(())
}

/// Delete a Widget together with all links it owns
///
/// # Errors
///
/// * `WidgetNotFound` - If the widget doesn't exist
pub fn delete_widget(store: &mut Store, widget_id: i64) -> Result<()> {
    store.get_widget(widget_id)?;

    let link_ids: Vec<i64> = store
        .links_for_widget(widget_id)
        .iter()
        .map(|l| l.id)
        .collect();
    for link_id in &link_ids {
        store.remove_link(*link_id);
    }
    store.remove_widget(widget_id);

    debug!(widget_id, links = link_ids.len(), "Cascade-deleted widget");
    Ok(())
}

/// List the widgets of one (page, column) group in display order
pub fn widgets_in_column_ordered(store: &Store, page_id: i64, column_id: i64) -> Vec<&Widget> {
    sorted_by_order(store.widgets_in_column(page_id, column_id))
}
