pub mod backup;
pub mod link;
pub mod page;
pub mod seed;
pub mod widget;

use clap::ValueEnum;
use zandar_core::{apply, Command, Side, Store};
use zandar_store::Database;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Drop side argument shared by the reorder/move subcommands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SideArg {
    Above,
    Below,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Above => Side::Above,
            SideArg::Below => Side::Below,
        }
    }
}

/// Open the database, creating its parent directory if needed
pub fn open_database(db_path: &str) -> Result<Database, Box<dyn std::error::Error>> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(Database::open(db_path)?)
}

/// Load, apply one command, persist, and return the new state
pub fn run_command(db_path: &str, cmd: Command) -> Result<Store, Box<dyn std::error::Error>> {
    let mut database = open_database(db_path)?;
    let store = database.load()?;
    let next = apply(&store, cmd)?;
    database.persist(&next)?;
    Ok(next)
}
