//! Durable store facade
//!
//! [`Database`] owns the SQLite connection and exposes whole-store
//! operations with the transaction discipline the core relies on: every
//! multi-row mutation is one transaction, every joint read of the three
//! tables happens inside one transaction.

use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, info};
use zandar_core::backup::{self, BackupDocument, DatabaseStats, ImportStats};
use zandar_core::Store;

use crate::errors::{from_rusqlite, Result};
use crate::{db, hydration, migrations, repo};

/// Handle to the durable Zandar store
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at the given path and migrate it
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut conn = db::open(path)?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Hydrate the full record set into an in-memory Store
    ///
    /// The three tables are read inside one transaction, so the returned
    /// store is a consistent joint view - never a torn read.
    pub fn load(&mut self) -> Result<Store> {
        let tx = self.conn.transaction().map_err(from_rusqlite)?;

        let mut store = Store::new();
        hydration::load_all_pages(&tx, &mut store)?;
        hydration::load_all_widgets(&tx, &mut store)?;
        hydration::load_all_links(&tx, &mut store)?;

        tx.commit().map_err(from_rusqlite)?;

        let (pages, widgets, links) = store.counts();
        debug!(pages, widgets, links, "Hydrated store");
        Ok(store)
    }

    /// Checkpoint the full in-memory state in one transaction
    ///
    /// Replaces the durable contents with `store`. A failure partway
    /// through rolls the whole write back.
    pub fn persist(&mut self, store: &Store) -> Result<()> {
        let tx = self.conn.transaction().map_err(from_rusqlite)?;

        repo::clear_all(&tx)?;
        for page in store.list_pages() {
            repo::persist_page(&tx, page)?;
        }
        for widget in store.list_widgets() {
            repo::persist_widget(&tx, widget)?;
        }
        for link in store.list_links() {
            repo::persist_link(&tx, link)?;
        }

        tx.commit().map_err(from_rusqlite)?;

        let (pages, widgets, links) = store.counts();
        debug!(pages, widgets, links, "Persisted store");
        Ok(())
    }

    /// Serialize the durable contents into a backup document
    pub fn export(&mut self) -> Result<BackupDocument> {
        let store = self.load()?;
        Ok(backup::serialize(&store))
    }

    /// Current record counts
    pub fn stats(&mut self) -> Result<DatabaseStats> {
        let store = self.load()?;
        Ok(backup::statistics(&store))
    }

    /// Replace the durable contents with a validated backup document
    ///
    /// The document is staged through the core restore first, which
    /// validates it and applies the one-time normalization step; the
    /// staged state is then checkpointed in a single transaction. A
    /// failure at either step leaves the previous contents untouched -
    /// never a half-cleared database.
    pub fn restore_replace(&mut self, document: &BackupDocument) -> Result<ImportStats> {
        let mut staged = Store::new();
        let stats = backup::restore_replace(&mut staged, document)?;
        self.persist(&staged)?;

        info!(
            pages = stats.pages_imported,
            widgets = stats.widgets_imported,
            links = stats.links_imported,
            "Restored database from backup"
        );
        Ok(stats)
    }
}
