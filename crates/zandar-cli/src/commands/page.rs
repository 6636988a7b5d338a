//! Page subcommands

use clap::{Args, Subcommand};
use zandar_core::ops::page_ops;
use zandar_core::Command;

use super::{open_database, run_command, CliResult, SideArg};

#[derive(Debug, Args)]
pub struct PageArgs {
    #[command(subcommand)]
    pub command: PageCommand,
}

#[derive(Debug, Subcommand)]
pub enum PageCommand {
    /// Create a new page at the end of the tab list
    Add { title: String },
    /// Rename a page
    Rename { page_id: i64, title: String },
    /// Move a page tab relative to another tab
    Reorder {
        moving_id: i64,
        target_id: i64,
        #[arg(long, value_enum)]
        side: SideArg,
    },
    /// Delete a page and everything on it
    Delete { page_id: i64 },
    /// List pages in tab order
    List,
}

pub fn execute(db_path: &str, args: PageArgs) -> CliResult {
    match args.command {
        PageCommand::Add { title } => {
            let next = run_command(db_path, Command::PageCreate { title })?;
            let page = page_ops::list_pages_ordered(&next)
                .last()
                .map(|p| p.id)
                .unwrap_or_default();
            println!("Created page {page}");
        }
        PageCommand::Rename { page_id, title } => {
            run_command(db_path, Command::PageRename { page_id, title })?;
            println!("Renamed page {page_id}");
        }
        PageCommand::Reorder {
            moving_id,
            target_id,
            side,
        } => {
            run_command(
                db_path,
                Command::PageReorder {
                    moving_id,
                    target_id,
                    side: side.into(),
                },
            )?;
            println!("Reordered pages");
        }
        PageCommand::Delete { page_id } => {
            run_command(db_path, Command::PageDelete { page_id })?;
            println!("Deleted page {page_id}");
        }
        PageCommand::List => {
            let mut database = open_database(db_path)?;
            let store = database.load()?;
            for page in page_ops::list_pages_ordered(&store) {
                println!("{:>4}  {}", page.id, page.title);
            }
        }
    }
    Ok(())
}
