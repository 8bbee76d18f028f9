//! Read-only views: folder listing, outline, and search.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use favhub_core::error::AppError;
use favhub_entity::node::Node;
use favhub_entity::search::SearchRecord;
use favhub_service::{BookmarkService, ViewSession};

use crate::output::{self, OutputFormat};

/// Arguments for search
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword matched against names, URLs, and descriptions
    pub keyword: String,
}

/// Folder listing row
#[derive(Debug, Serialize, Tabled)]
pub struct ItemRow {
    /// Position in the folder's stored order
    #[tabled(rename = "#")]
    pub index: usize,
    /// Folder or link
    pub kind: String,
    /// Name
    pub name: String,
    /// Target URL (links only)
    pub url: String,
    /// Visit count (links only)
    pub clicks: u64,
    /// Description
    pub description: String,
}

impl ItemRow {
    fn new(index: usize, node: &Node) -> Self {
        let url = match node {
            Node::Link(link) => link.url.clone(),
            Node::Folder(_) => String::new(),
        };
        Self {
            index,
            kind: node.kind().to_string(),
            name: node.name().to_string(),
            url,
            clicks: node.click_count(),
            description: node.description().unwrap_or_default().to_string(),
        }
    }
}

/// Search result row
#[derive(Debug, Serialize, Tabled)]
pub struct ResultRow {
    /// Position in the result list
    #[tabled(rename = "#")]
    pub index: usize,
    /// Folder or link
    pub kind: String,
    /// Name
    pub name: String,
    /// Containing folders
    pub path: String,
    /// Target URL (links only)
    pub url: String,
}

impl ResultRow {
    fn new(index: usize, record: &SearchRecord) -> Self {
        let url = match &record.node {
            Node::Link(link) => link.url.clone(),
            Node::Folder(_) => String::new(),
        };
        Self {
            index,
            kind: record.node.kind().to_string(),
            name: record.node.name().to_string(),
            path: record.path.clone(),
            url,
        }
    }
}

/// List the current folder, folders first and links by popularity.
pub fn list(
    service: &BookmarkService,
    session: &ViewSession,
    format: OutputFormat,
) -> Result<(), AppError> {
    let items = service.current_items(session)?;
    if format == OutputFormat::Table {
        let crumbs: Vec<String> = service
            .breadcrumbs(session)
            .into_iter()
            .map(|c| c.label)
            .collect();
        println!("{}", crumbs.join(" / "));
    }
    let rows: Vec<ItemRow> = items
        .iter()
        .map(|item| ItemRow::new(item.original_index, item.node))
        .collect();
    output::print_list(&rows, format);
    Ok(())
}

/// Print the whole tree.
pub fn tree(service: &BookmarkService, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => println!("{}", output::outline(service.roots())),
        OutputFormat::Json => output::print_item(&service.roots(), format),
    }
    Ok(())
}

/// Search all folders.
pub fn search(
    args: &SearchArgs,
    service: &BookmarkService,
    session: &mut ViewSession,
    format: OutputFormat,
) -> Result<(), AppError> {
    session.set_search(&args.keyword);
    let rows: Vec<ResultRow> = service
        .search_results(session)
        .iter()
        .enumerate()
        .map(|(i, record)| ResultRow::new(i, record))
        .collect();
    output::print_list(&rows, format);
    Ok(())
}
