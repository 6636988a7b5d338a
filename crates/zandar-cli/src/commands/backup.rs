//! Export / import / stats subcommands

use clap::Args;
use zandar_core::backup::{self, export};

use super::{open_database, CliResult};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output path; defaults to a timestamped filename in the current
    /// directory
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Backup file to import
    pub file: String,

    /// Confirm replacing the entire database contents
    #[arg(long)]
    pub yes: bool,
}

pub fn execute_export(db_path: &str, args: ExportArgs) -> CliResult {
    let mut database = open_database(db_path)?;
    let document = database.export()?;
    let json = export::to_json(&document)?;

    let filename = args
        .out
        .unwrap_or_else(|| export::backup_filename(chrono::Local::now()));
    std::fs::write(&filename, json)?;

    println!(
        "Exported {} pages, {} widgets, {} links to {}",
        document.metadata.total_pages,
        document.metadata.total_widgets,
        document.metadata.total_links,
        filename
    );
    Ok(())
}

pub fn execute_import(db_path: &str, args: ImportArgs) -> CliResult {
    // The engine replaces unconditionally once invoked; the confirmation
    // gate lives here
    if !args.yes {
        return Err("import replaces the entire database; pass --yes to confirm".into());
    }

    let raw = std::fs::read_to_string(&args.file)?;
    let document = backup::deserialize(&raw)?;

    let mut database = open_database(db_path)?;
    let stats = database.restore_replace(&document)?;

    println!(
        "Imported {} pages, {} widgets, {} links (backup from {})",
        stats.pages_imported, stats.widgets_imported, stats.links_imported, document.timestamp
    );
    Ok(())
}

pub fn execute_stats(db_path: &str) -> CliResult {
    let mut database = open_database(db_path)?;
    let stats = database.stats()?;
    println!(
        "pages: {}\nwidgets: {}\nlinks: {}\ntotal: {}",
        stats.pages, stats.widgets, stats.links, stats.total
    );
    Ok(())
}
