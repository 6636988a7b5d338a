//! Zandar Core - ordering and backup engine for the Zandar start page
//!
//! This crate provides the data structures and operations behind the Zandar
//! bookmark organizer, including:
//! - Page, Widget and Link models forming a three-level ownership hierarchy
//! - An ordering engine keeping sibling groups in a stable, user-controlled
//!   sequence under drag-reorder, cross-container moves and cascade deletes
//! - A versioned backup codec with hard version gating and atomic
//!   replace-restore semantics
//! - A functional-boundary `apply()` making every multi-record mutation
//!   all-or-nothing
//!
//! Durable persistence lives in `zandar-store`; the presentation layer sits
//! entirely outside this crate and talks to it through [`Command`]s.

pub mod apply;
pub mod backup;
pub mod commands;
pub mod errors;
pub mod favicon;
pub mod logging;
pub mod model;
pub mod ops;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use errors::{Result, ZandarError};
pub use model::{Link, Page, Widget};
pub use ops::{GroupItem, Side, Store};
