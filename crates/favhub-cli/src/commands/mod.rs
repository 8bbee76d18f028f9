//! CLI command definitions and dispatch.

pub mod arrange;
pub mod browse;
pub mod config;
pub mod exchange;
pub mod item;

use clap::{Parser, Subcommand};

use favhub_core::config::AppConfig;
use favhub_core::error::AppError;
use favhub_service::{BookmarkService, ViewSession};

use crate::output::OutputFormat;
use crate::sink::ConsoleSink;

/// FavHub: browse and organize a tree of bookmarks
#[derive(Debug, Parser)]
#[command(name = "favhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "FAVHUB_CONFIG", default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Folder to work in; repeat to descend (`--in Work --in Tools`)
    #[arg(long = "in", value_name = "FOLDER", global = true)]
    pub path: Vec<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the current folder in display order
    List,
    /// Show the whole tree as an outline
    Tree,
    /// Search every folder by keyword
    Search(browse::SearchArgs),
    /// Add a link or folder to the current folder
    Add(item::AddArgs),
    /// Edit an item
    Edit(item::EditArgs),
    /// Delete one or more items
    Delete(item::DeleteArgs),
    /// Open a link and count the visit
    Click(item::ClickArgs),
    /// Move items into a folder, the parent, or a breadcrumb
    Move(arrange::MoveArgs),
    /// Change an item's position within the current folder
    Reorder(arrange::ReorderArgs),
    /// Replace the whole tree with an exported file
    Import(exchange::ImportArgs),
    /// Write the whole tree to a dated JSON file
    Export(exchange::ExportArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Config(args) => config::execute(args, &self.config, config, self.format),
            command => {
                let mut service = open_service(config, self.format)?;
                let mut session = ViewSession::at_path(self.path.clone());
                dispatch(command, &mut service, &mut session, self.format)
            }
        }
    }
}

fn dispatch(
    command: &Commands,
    service: &mut BookmarkService,
    session: &mut ViewSession,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        Commands::List => browse::list(service, session, format),
        Commands::Tree => browse::tree(service, format),
        Commands::Search(args) => browse::search(args, service, session, format),
        Commands::Add(args) => item::add(args, service, session, format),
        Commands::Edit(args) => item::edit(args, service, session),
        Commands::Delete(args) => item::delete(args, service, session),
        Commands::Click(args) => item::click(args, service, session, format),
        Commands::Move(args) => arrange::move_items(args, service, session, format),
        Commands::Reorder(args) => arrange::reorder(args, service, session, format),
        Commands::Import(args) => exchange::import(args, service, session),
        Commands::Export(args) => exchange::export(args, service),
        Commands::Config(_) => Ok(()),
    }
}

/// Helper: open the bookmark service with a console sink
pub fn open_service(config: &AppConfig, format: OutputFormat) -> Result<BookmarkService, AppError> {
    let sink = ConsoleSink::new(format == OutputFormat::Json);
    BookmarkService::from_config(config, Box::new(sink))
}
