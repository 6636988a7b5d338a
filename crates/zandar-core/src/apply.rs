//! Functional-boundary apply function
//!
//! `apply()` is the canonical entry point for atomic state mutations.
//! Multi-record operations (cascade delete, group renumber, restore) run
//! against a working copy of the state; only a fully successful command
//! replaces the caller's state.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: Either the entire command succeeds and a new valid
//!   state is returned, or it fails and the caller's state is untouched -
//!   the working copy of a failed command is simply discarded.
//! - **No panics**: Invalid input returns typed errors.
//! - **Fresh reads**: Ops re-read group membership from the working copy,
//!   never from a view captured before the triggering gesture.
//!
//! ## Example
//!
//! ```
//! use zandar_core::{apply, Command, Store};
//!
//! let state = Store::new();
//! let new_state = apply(&state, Command::PageCreate { title: "Home".to_string() }).unwrap();
//! assert_eq!(new_state.list_pages().len(), 1);
//! ```

use crate::backup::import;
use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{link_ops, page_ops, widget_ops, Store};

/// Apply a command to a store, returning the new store state
///
/// # Errors
///
/// Returns an error when the command cannot be applied (validation
/// failures, missing records on non-gesture ops, structural problems in a
/// restore document). The caller's state is never modified on error.
pub fn apply(state: &Store, cmd: Command) -> Result<Store> {
    let mut next = state.clone();

    match cmd {
        Command::PageCreate { title } => {
            page_ops::create_page(&mut next, &title)?;
        }
        Command::PageRename { page_id, title } => {
            page_ops::rename_page(&mut next, page_id, &title)?;
        }
        Command::PageReorder {
            moving_id,
            target_id,
            side,
        } => {
            page_ops::reorder_page(&mut next, moving_id, target_id, side)?;
        }
        Command::PageDelete { page_id } => {
            page_ops::delete_page(&mut next, page_id)?;
        }

        Command::WidgetCreate {
            page_id,
            column_id,
            title,
        } => {
            widget_ops::create_widget(&mut next, page_id, column_id, title.as_deref())?;
        }
        Command::WidgetRename { widget_id, title } => {
            widget_ops::rename_widget(&mut next, widget_id, &title)?;
        }
        Command::WidgetSetCollapsed {
            widget_id,
            collapsed,
        } => {
            widget_ops::set_collapsed(&mut next, widget_id, collapsed)?;
        }
        Command::WidgetReorder {
            moving_id,
            target_id,
            side,
        } => {
            widget_ops::reorder_widget(&mut next, moving_id, target_id, side)?;
        }
        Command::WidgetMove {
            widget_id,
            column_id,
            target,
        } => {
            widget_ops::move_widget_to_column(&mut next, widget_id, column_id, target)?;
        }
        Command::WidgetDelete { widget_id } => {
            widget_ops::delete_widget(&mut next, widget_id)?;
        }

        Command::LinkCreate {
            widget_id,
            name,
            url,
        } => {
            link_ops::create_link(&mut next, widget_id, &name, &url)?;
        }
        Command::LinkReorder {
            moving_id,
            target_id,
            side,
        } => {
            link_ops::reorder_link(&mut next, moving_id, target_id, side)?;
        }
        Command::LinkMove {
            link_id,
            widget_id,
            target,
        } => {
            link_ops::move_link_to_widget(&mut next, link_id, widget_id, target)?;
        }
        Command::LinkDelete { link_id } => {
            link_ops::delete_link(&mut next, link_id)?;
        }

        Command::RestoreReplace { document } => {
            import::restore_replace(&mut next, &document)?;
        }
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ZandarError;

    #[test]
    fn test_apply_success_returns_new_state() {
        let state = Store::new();
        let next = apply(
            &state,
            Command::PageCreate {
                title: "Home".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next.list_pages().len(), 1);
        assert_eq!(state.list_pages().len(), 0);
    }

    #[test]
    fn test_apply_error_leaves_state_untouched() {
        let state = apply(
            &Store::new(),
            Command::PageCreate {
                title: "Home".to_string(),
            },
        )
        .unwrap();

        let result = apply(
            &state,
            Command::PageRename {
                page_id: 1,
                title: "  ".to_string(),
            },
        );
        assert_eq!(result, Err(ZandarError::InvalidTitle));
        assert_eq!(state.get_page(1).unwrap().title, "Home");
    }
}
