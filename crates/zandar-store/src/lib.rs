//! Zandar Store - SQLite persistence for the Zandar core
//!
//! Persists the Page/Widget/Link hierarchy to an embedded SQLite database
//! and hydrates it back into the in-memory `zandar_core::Store`. Every
//! multi-row mutation (checkpoint, restore) runs in one transaction, and
//! joint reads of the three tables share one transaction so exports are
//! never torn.

pub mod database;
pub mod db;
pub mod errors;
pub mod hydration;
pub mod migrations;
pub mod repo;

pub use database::Database;
pub use errors::Result;
