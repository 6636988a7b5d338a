//! Command types representing all mutating operations
//!
//! Commands are processed by the `apply()` function, which executes the
//! command against a copy of the current state and returns a new valid
//! state. The presentation layer never mutates records directly; every
//! gesture becomes exactly one Command.

use crate::backup::BackupDocument;
use crate::ops::Side;

/// Command enum covering every mutation the engine supports
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a new page at the end of the tab list
    PageCreate { title: String },

    /// Rename a page
    PageRename { page_id: i64, title: String },

    /// Move a page tab relative to another tab
    PageReorder {
        moving_id: i64,
        target_id: i64,
        side: Side,
    },

    /// Delete a page, cascading to its widgets and their links
    PageDelete { page_id: i64 },

    /// Create a new widget at the end of a page column
    WidgetCreate {
        page_id: i64,
        column_id: i64,
        title: Option<String>,
    },

    /// Rename a widget (blank titles reset to the default label)
    WidgetRename { widget_id: i64, title: String },

    /// Set a widget's collapsed flag
    WidgetSetCollapsed { widget_id: i64, collapsed: bool },

    /// Move a widget relative to a sibling in its column
    WidgetReorder {
        moving_id: i64,
        target_id: i64,
        side: Side,
    },

    /// Move a widget into another column, optionally onto a sibling
    WidgetMove {
        widget_id: i64,
        column_id: i64,
        target: Option<(i64, Side)>,
    },

    /// Delete a widget, cascading to its links
    WidgetDelete { widget_id: i64 },

    /// Create a new link at the end of a widget's list
    LinkCreate {
        widget_id: i64,
        name: String,
        url: String,
    },

    /// Move a link relative to a sibling inside its widget
    LinkReorder {
        moving_id: i64,
        target_id: i64,
        side: Side,
    },

    /// Move a link into another widget, optionally onto a sibling
    LinkMove {
        link_id: i64,
        widget_id: i64,
        target: Option<(i64, Side)>,
    },

    /// Delete a link
    LinkDelete { link_id: i64 },

    /// Replace the entire store with a validated backup document
    RestoreReplace { document: Box<BackupDocument> },
}
