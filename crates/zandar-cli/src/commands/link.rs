//! Link subcommands

use clap::{Args, Subcommand};
use zandar_core::ops::link_ops;
use zandar_core::Command;

use super::{open_database, run_command, CliResult, SideArg};

#[derive(Debug, Args)]
pub struct LinkArgs {
    #[command(subcommand)]
    pub command: LinkCommand,
}

#[derive(Debug, Subcommand)]
pub enum LinkCommand {
    /// Create a new link at the end of a widget's list
    Add {
        #[arg(long)]
        widget: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
    },
    /// Move a link relative to a sibling inside its widget
    Reorder {
        moving_id: i64,
        target_id: i64,
        #[arg(long, value_enum)]
        side: SideArg,
    },
    /// Move a link into another widget, optionally onto a sibling
    Move {
        link_id: i64,
        #[arg(long)]
        widget: i64,
        #[arg(long, requires = "side")]
        target: Option<i64>,
        #[arg(long, value_enum, requires = "target")]
        side: Option<SideArg>,
    },
    /// Delete a link
    Delete { link_id: i64 },
    /// List a widget's links in display order
    List {
        #[arg(long)]
        widget: i64,
    },
}

pub fn execute(db_path: &str, args: LinkArgs) -> CliResult {
    match args.command {
        LinkCommand::Add { widget, name, url } => {
            run_command(
                db_path,
                Command::LinkCreate {
                    widget_id: widget,
                    name,
                    url,
                },
            )?;
            println!("Created link in widget {widget}");
        }
        LinkCommand::Reorder {
            moving_id,
            target_id,
            side,
        } => {
            run_command(
                db_path,
                Command::LinkReorder {
                    moving_id,
                    target_id,
                    side: side.into(),
                },
            )?;
            println!("Reordered links");
        }
        LinkCommand::Move {
            link_id,
            widget,
            target,
            side,
        } => {
            let target = match (target, side) {
                (Some(target_id), Some(side)) => Some((target_id, side.into())),
                _ => None,
            };
            run_command(
                db_path,
                Command::LinkMove {
                    link_id,
                    widget_id: widget,
                    target,
                },
            )?;
            println!("Moved link {link_id} to widget {widget}");
        }
        LinkCommand::Delete { link_id } => {
            run_command(db_path, Command::LinkDelete { link_id })?;
            println!("Deleted link {link_id}");
        }
        LinkCommand::List { widget } => {
            let mut database = open_database(db_path)?;
            let store = database.load()?;
            for link in link_ops::links_for_widget_ordered(&store, widget) {
                println!("{:>4}  {}  {}", link.id, link.name, link.url);
            }
        }
    }
    Ok(())
}
