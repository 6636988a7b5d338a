//! Zandar CLI
//!
//! Command-line interface for the Zandar start-page store

use clap::{Parser, Subcommand};
use zandar_core::logging;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "zandar")]
#[command(about = "Zandar - start page and bookmark organizer", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, default_value = ".zandar/store.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Page operations
    Page(commands::page::PageArgs),
    /// Widget operations
    Widget(commands::widget::WidgetArgs),
    /// Link operations
    Link(commands::link::LinkArgs),
    /// Export the full database to a backup file
    Export(commands::backup::ExportArgs),
    /// Import a backup file, replacing the database contents
    Import(commands::backup::ImportArgs),
    /// Show record counts
    Stats,
    /// Populate the database with demo data
    Seed,
}

fn main() {
    logging::init(logging::Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Page(args) => commands::page::execute(&cli.db, args),
        Commands::Widget(args) => commands::widget::execute(&cli.db, args),
        Commands::Link(args) => commands::link::execute(&cli.db, args),
        Commands::Export(args) => commands::backup::execute_export(&cli.db, args),
        Commands::Import(args) => commands::backup::execute_import(&cli.db, args),
        Commands::Stats => commands::backup::execute_stats(&cli.db),
        Commands::Seed => commands::seed::execute(&cli.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
