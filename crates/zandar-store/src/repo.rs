//! Row-level persistence for Pages, Widgets and Links
//!
//! Upsert-style writes keyed on the record id. `rusqlite::Transaction`
//! derefs to `Connection`, so every function here works both standalone
//! and inside a transaction; multi-row operations always go through one.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use uuid::Uuid;
use zandar_core::errors::ZandarError;
use zandar_core::model::{Link, Page, Widget};

use crate::errors::{from_rusqlite, Result};

/// Persist a Page, inserting or updating by id
pub fn persist_page(conn: &Connection, page: &Page) -> Result<()> {
    conn.execute(
        "INSERT INTO pages (id, uuid, title, sort_order, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            uuid = excluded.uuid,
            title = excluded.title,
            sort_order = excluded.sort_order,
            updated_at = excluded.updated_at",
        rusqlite::params![
            page.id,
            page.uuid.to_string(),
            page.title,
            page.order,
            page.created_at.to_rfc3339(),
            page.updated_at.to_rfc3339(),
        ],
    )
    .map_err(from_rusqlite)?;
    Ok(())
}

/// Persist a Widget, inserting or updating by id
pub fn persist_widget(conn: &Connection, widget: &Widget) -> Result<()> {
    conn.execute(
        "INSERT INTO widgets (id, uuid, title, collapsed, page_id, column_id, sort_order, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(id) DO UPDATE SET
            uuid = excluded.uuid,
            title = excluded.title,
            collapsed = excluded.collapsed,
            page_id = excluded.page_id,
            column_id = excluded.column_id,
            sort_order = excluded.sort_order,
            updated_at = excluded.updated_at",
        rusqlite::params![
            widget.id,
            widget.uuid.to_string(),
            widget.title,
            if widget.collapsed { 1 } else { 0 },
            widget.page_id,
            widget.column_id,
            widget.order,
            widget.created_at.to_rfc3339(),
            widget.updated_at.to_rfc3339(),
        ],
    )
    .map_err(from_rusqlite)?;
    Ok(())
}

/// Persist a Link, inserting or updating by id
pub fn persist_link(conn: &Connection, link: &Link) -> Result<()> {
    conn.execute(
        "INSERT INTO links (id, uuid, name, url, widget_id, sort_order, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(id) DO UPDATE SET
            uuid = excluded.uuid,
            name = excluded.name,
            url = excluded.url,
            widget_id = excluded.widget_id,
            sort_order = excluded.sort_order,
            updated_at = excluded.updated_at",
        rusqlite::params![
            link.id,
            link.uuid.to_string(),
            link.name,
            link.url,
            link.widget_id,
            link.order,
            link.created_at.to_rfc3339(),
            link.updated_at.to_rfc3339(),
        ],
    )
    .map_err(from_rusqlite)?;
    Ok(())
}

/// Remove every row from all three tables
pub fn clear_all(conn: &Connection) -> Result<()> {
    for table in ["links", "widgets", "pages"] {
        conn.execute(&format!("DELETE FROM {table}"), [])
            .map_err(from_rusqlite)?;
    }
    Ok(())
}

/// Parse a stored RFC 3339 timestamp
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ZandarError::Storage {
            reason: format!("corrupt timestamp '{raw}': {e}"),
        })
}

/// Parse a stored uuid
pub(crate) fn parse_uuid(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|e| ZandarError::Storage {
        reason: format!("corrupt uuid '{raw}': {e}"),
    })
}
