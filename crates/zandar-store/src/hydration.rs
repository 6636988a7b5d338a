//! Hydration layer - loads rows from SQLite into the in-memory Store
//!
//! Rows come back in id order and are inserted verbatim (counters advance
//! past the loaded ids), with the normalization step applied once here so
//! ordering logic downstream never re-checks defaults.

use rusqlite::Connection;
use zandar_core::model::{Link, Page, Widget};
use zandar_core::Store;

use crate::errors::{from_rusqlite, Result};
use crate::repo::{parse_timestamp, parse_uuid};

/// Load all Pages from the database into the Store
pub fn load_all_pages(conn: &Connection, store: &mut Store) -> Result<()> {
    let mut stmt = conn
        .prepare(
            "SELECT id, uuid, title, sort_order, created_at, updated_at
             FROM pages ORDER BY id",
        )
        .map_err(from_rusqlite)?;

    let rows: Vec<(i64, String, String, i64, String, String)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    for (id, uuid, title, order, created_at, updated_at) in rows {
        store.insert_page(Page {
            id,
            uuid: parse_uuid(&uuid)?,
            title,
            order,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        });
    }
    Ok(())
}

/// Load all Widgets from the database into the Store
pub fn load_all_widgets(conn: &Connection, store: &mut Store) -> Result<()> {
    let mut stmt = conn
        .prepare(
            "SELECT id, uuid, title, collapsed, page_id, column_id, sort_order, created_at, updated_at
             FROM widgets ORDER BY id",
        )
        .map_err(from_rusqlite)?;

    #[allow(clippy::type_complexity)]
    let rows: Vec<(i64, String, String, i64, i64, i64, i64, String, String)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
                row.get(8)?,
            ))
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    for (id, uuid, title, collapsed, page_id, column_id, order, created_at, updated_at) in rows {
        let mut widget = Widget {
            id,
            uuid: parse_uuid(&uuid)?,
            title,
            collapsed: collapsed != 0,
            page_id,
            column_id,
            order,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        };
        widget.normalize();
        store.insert_widget(widget);
    }
    Ok(())
}

/// Load all Links from the database into the Store
pub fn load_all_links(conn: &Connection, store: &mut Store) -> Result<()> {
    let mut stmt = conn
        .prepare(
            "SELECT id, uuid, name, url, widget_id, sort_order, created_at, updated_at
             FROM links ORDER BY id",
        )
        .map_err(from_rusqlite)?;

    #[allow(clippy::type_complexity)]
    let rows: Vec<(i64, String, String, String, i64, i64, String, String)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
            ))
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    for (id, uuid, name, url, widget_id, order, created_at, updated_at) in rows {
        store.insert_link(Link {
            id,
            uuid: parse_uuid(&uuid)?,
            name,
            url,
            widget_id,
            order,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        });
    }
    Ok(())
}
