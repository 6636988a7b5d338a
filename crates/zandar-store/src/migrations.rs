//! Embedded schema migrations
//!
//! Migrations are applied in order on every open, each inside its own
//! transaction, with applied ids recorded in a schema_version table so
//! re-opens are idempotent.

use crate::errors::{from_rusqlite, migration_error, Result};
use rusqlite::Connection;
use tracing::debug;

/// A single schema migration
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All migrations, in application order
pub fn migrations() -> &'static [Migration] {
    &[Migration {
        id: "0001_initial",
        sql: "
            CREATE TABLE pages (
                id          INTEGER PRIMARY KEY,
                uuid        TEXT NOT NULL,
                title       TEXT NOT NULL,
                sort_order  INTEGER NOT NULL DEFAULT 0,
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );
            CREATE TABLE widgets (
                id          INTEGER PRIMARY KEY,
                uuid        TEXT NOT NULL,
                title       TEXT NOT NULL,
                collapsed   INTEGER NOT NULL DEFAULT 0,
                page_id     INTEGER NOT NULL,
                column_id   INTEGER NOT NULL DEFAULT 1,
                sort_order  INTEGER NOT NULL DEFAULT 0,
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );
            CREATE TABLE links (
                id          INTEGER PRIMARY KEY,
                uuid        TEXT NOT NULL,
                name        TEXT NOT NULL,
                url         TEXT NOT NULL,
                widget_id   INTEGER NOT NULL,
                sort_order  INTEGER NOT NULL DEFAULT 0,
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );
            CREATE INDEX idx_widgets_page ON widgets(page_id, column_id);
            CREATE INDEX idx_links_widget ON links(widget_id);
        ",
    }]
}

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in migrations() {
        if is_applied(conn, migration.id)? {
            continue;
        }
        apply_migration(conn, migration)?;
    }

    Ok(())
}

fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(from_rusqlite)?;
    Ok(())
}

fn is_applied(conn: &Connection, migration_id: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM schema_version WHERE migration_id = ?1",
            [migration_id],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)?;
    Ok(count > 0)
}

fn apply_migration(conn: &mut Connection, migration: &Migration) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(migration.sql)
        .map_err(|e| migration_error(migration.id, &e.to_string()))?;
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at) VALUES (?1, ?2)",
        rusqlite::params![migration.id, chrono::Utc::now().to_rfc3339()],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;
    debug!(migration_id = migration.id, "Applied migration");
    Ok(())
}
