//! Widget subcommands

use clap::{Args, Subcommand};
use zandar_core::ops::widget_ops;
use zandar_core::Command;

use super::{open_database, run_command, CliResult, SideArg};

#[derive(Debug, Args)]
pub struct WidgetArgs {
    #[command(subcommand)]
    pub command: WidgetCommand,
}

#[derive(Debug, Subcommand)]
pub enum WidgetCommand {
    /// Create a new widget at the end of a page column
    Add {
        #[arg(long)]
        page: i64,
        #[arg(long, default_value_t = 1)]
        column: i64,
        #[arg(long)]
        title: Option<String>,
    },
    /// Rename a widget (a blank title restores the default label)
    Rename { widget_id: i64, title: String },
    /// Collapse or expand a widget
    Collapse {
        widget_id: i64,
        #[arg(long, default_value_t = true)]
        collapsed: bool,
    },
    /// Move a widget relative to a sibling in its column
    Reorder {
        moving_id: i64,
        target_id: i64,
        #[arg(long, value_enum)]
        side: SideArg,
    },
    /// Move a widget into another column, optionally onto a sibling
    Move {
        widget_id: i64,
        #[arg(long)]
        column: i64,
        #[arg(long, requires = "side")]
        target: Option<i64>,
        #[arg(long, value_enum, requires = "target")]
        side: Option<SideArg>,
    },
    /// Delete a widget and its links
    Delete { widget_id: i64 },
    /// List the widgets of one page column in display order
    List {
        #[arg(long)]
        page: i64,
        #[arg(long, default_value_t = 1)]
        column: i64,
    },
}

pub fn execute(db_path: &str, args: WidgetArgs) -> CliResult {
    match args.command {
        WidgetCommand::Add {
            page,
            column,
            title,
        } => {
            run_command(
                db_path,
                Command::WidgetCreate {
                    page_id: page,
                    column_id: column,
                    title,
                },
            )?;
            println!("Created widget on page {page}, column {column}");
        }
        WidgetCommand::Rename { widget_id, title } => {
            run_command(db_path, Command::WidgetRename { widget_id, title })?;
            println!("Renamed widget {widget_id}");
        }
        WidgetCommand::Collapse {
            widget_id,
            collapsed,
        } => {
            run_command(
                db_path,
                Command::WidgetSetCollapsed {
                    widget_id,
                    collapsed,
                },
            )?;
            println!(
                "{} widget {widget_id}",
                if collapsed { "Collapsed" } else { "Expanded" }
            );
        }
        WidgetCommand::Reorder {
            moving_id,
            target_id,
            side,
        } => {
            run_command(
                db_path,
                Command::WidgetReorder {
                    moving_id,
                    target_id,
                    side: side.into(),
                },
            )?;
            println!("Reordered widgets");
        }
        WidgetCommand::Move {
            widget_id,
            column,
            target,
            side,
        } => {
            let target = match (target, side) {
                (Some(target_id), Some(side)) => Some((target_id, side.into())),
                _ => None,
            };
            run_command(
                db_path,
                Command::WidgetMove {
                    widget_id,
                    column_id: column,
                    target,
                },
            )?;
            println!("Moved widget {widget_id} to column {column}");
        }
        WidgetCommand::Delete { widget_id } => {
            run_command(db_path, Command::WidgetDelete { widget_id })?;
            println!("Deleted widget {widget_id}");
        }
        WidgetCommand::List { page, column } => {
            let mut database = open_database(db_path)?;
            let store = database.load()?;
            for widget in widget_ops::widgets_in_column_ordered(&store, page, column) {
                let marker = if widget.collapsed { "-" } else { "+" };
                println!("{:>4}  [{marker}] {}", widget.id, widget.title);
            }
        }
    }
    Ok(())
}
