//! Add, edit, delete, and click commands.
//!
//! Items are addressed by their position in the current folder's stored
//! order (the `#` column of `list`), or by their position in the result
//! list of `--search <keyword>`.

use clap::{Args, Subcommand};

use favhub_core::error::AppError;
use favhub_core::types::NodeId;
use favhub_entity::node::{FolderDraft, LinkDraft, Node, NodeDraft};
use favhub_service::{BookmarkService, ViewSession};

use crate::output::{self, OutputFormat};

/// Arguments for add
#[derive(Debug, Args)]
pub struct AddArgs {
    /// What to add
    #[command(subcommand)]
    pub command: AddCommand,
}

/// Add subcommands
#[derive(Debug, Subcommand)]
pub enum AddCommand {
    /// Add a link
    Link {
        /// Link name
        #[arg(short, long)]
        name: String,
        /// Target URL
        #[arg(short, long)]
        url: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Icon URL
        #[arg(long)]
        icon: Option<String>,
    },
    /// Add a folder
    Folder {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },
}

/// Arguments for edit
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Item position
    pub index: usize,
    /// Address the item within the results of this search
    #[arg(short, long)]
    pub search: Option<String>,
    /// New name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New URL (links only)
    #[arg(short, long)]
    pub url: Option<String>,
    /// New description; pass an empty string to remove it
    #[arg(short, long)]
    pub description: Option<String>,
    /// New icon URL (links only); pass an empty string to remove it
    #[arg(long)]
    pub icon: Option<String>,
}

/// Arguments for delete
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Item positions
    #[arg(required = true)]
    pub indices: Vec<usize>,
    /// Address the items within the results of this search
    #[arg(short, long)]
    pub search: Option<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for click
#[derive(Debug, Args)]
pub struct ClickArgs {
    /// Link position
    pub index: usize,
    /// Address the link within the results of this search
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Add a node to the current folder.
pub fn add(
    args: &AddArgs,
    service: &mut BookmarkService,
    session: &mut ViewSession,
    format: OutputFormat,
) -> Result<(), AppError> {
    let draft = match &args.command {
        AddCommand::Link {
            name,
            url,
            description,
            icon,
        } => NodeDraft::Link(LinkDraft {
            name: name.clone(),
            url: url.clone(),
            description: description.clone(),
            icon: icon.clone(),
        }),
        AddCommand::Folder { name, description } => NodeDraft::Folder(FolderDraft {
            name: name.clone(),
            description: description.clone(),
        }),
    };

    let id = service.add_node(session, draft)?;
    if format == OutputFormat::Json {
        if let Some(node) = service.store().node(id) {
            output::print_item(node, format);
        }
    }
    Ok(())
}

/// Resolve an item position to the live node id.
fn target_id(
    service: &BookmarkService,
    session: &mut ViewSession,
    index: usize,
    search: Option<&str>,
) -> Result<NodeId, AppError> {
    match search {
        Some(keyword) => {
            session.set_search(keyword);
            Ok(service.search_record(session, index)?.id)
        }
        None => service
            .store()
            .children(session.current_path())?
            .get(index)
            .map(Node::id)
            .ok_or_else(|| AppError::not_found(format!("No item at position {index}"))),
    }
}

/// Start an edit draft from the node's current values, then apply overrides.
fn edit_draft(node: &Node, args: &EditArgs) -> Result<NodeDraft, AppError> {
    let draft = match node {
        Node::Folder(folder) => {
            if args.url.is_some() || args.icon.is_some() {
                return Err(AppError::validation("Folders have no URL or icon"));
            }
            NodeDraft::Folder(FolderDraft {
                name: args.name.clone().unwrap_or_else(|| folder.name.clone()),
                description: args
                    .description
                    .clone()
                    .or_else(|| folder.description.clone()),
            })
        }
        Node::Link(link) => NodeDraft::Link(LinkDraft {
            name: args.name.clone().unwrap_or_else(|| link.name.clone()),
            url: args.url.clone().unwrap_or_else(|| link.url.clone()),
            description: args.description.clone().or_else(|| link.description.clone()),
            icon: args.icon.clone().or_else(|| link.icon.clone()),
        }),
    };
    Ok(draft)
}

/// Edit an item in place.
pub fn edit(
    args: &EditArgs,
    service: &mut BookmarkService,
    session: &mut ViewSession,
) -> Result<(), AppError> {
    let id = target_id(service, session, args.index, args.search.as_deref())?;
    let node = service
        .store()
        .node(id)
        .ok_or_else(|| AppError::not_found("Node not found"))?;
    let draft = edit_draft(node, args)?;
    service.update_node(session, id, draft)
}

/// Delete items after confirmation.
pub fn delete(
    args: &DeleteArgs,
    service: &mut BookmarkService,
    session: &mut ViewSession,
) -> Result<(), AppError> {
    if let Some(keyword) = &args.search {
        session.set_search(keyword);
    }
    let len = service.rendered_len(session)?;
    if let Some(&stale) = args.indices.iter().find(|&&i| i >= len) {
        return Err(AppError::not_found(format!("No item at position {stale}")));
    }

    if !args.yes {
        let prompt = match args.indices.as_slice() {
            [_] => "Delete this item?".to_string(),
            indices => format!("Delete {} items?", indices.len()),
        };
        let confirm = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match args.indices.as_slice() {
        [index] if !session.is_searching() => {
            service.delete_node(session, *index)?;
        }
        indices => {
            for &index in indices {
                session.selection_mut().add(index);
            }
            service.delete_selected(session)?;
        }
    }
    Ok(())
}

/// Count a visit to a link and print its URL.
pub fn click(
    args: &ClickArgs,
    service: &mut BookmarkService,
    session: &mut ViewSession,
    format: OutputFormat,
) -> Result<(), AppError> {
    let id = target_id(service, session, args.index, args.search.as_deref())?;
    let link = service.record_click_by_id(id)?;
    match format {
        OutputFormat::Table => {
            output::print_success(&format!("Opening {}", link.url));
            output::print_kv("Clicks", &link.click_count.to_string());
        }
        OutputFormat::Json => output::print_item(&link, format),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use favhub_entity::node::{Folder, Link};

    fn edit_args() -> EditArgs {
        EditArgs {
            index: 0,
            search: None,
            name: None,
            url: None,
            description: None,
            icon: None,
        }
    }

    #[test]
    fn test_edit_draft_keeps_unset_fields() {
        let mut link = Link::new("GitHub", "https://github.com");
        link.description = Some("code".to_string());
        let args = EditArgs {
            name: Some("Hub".to_string()),
            ..edit_args()
        };

        match edit_draft(&Node::from(link), &args).unwrap() {
            NodeDraft::Link(draft) => {
                assert_eq!(draft.name, "Hub");
                assert_eq!(draft.url, "https://github.com");
                assert_eq!(draft.description.as_deref(), Some("code"));
            }
            NodeDraft::Folder(_) => panic!("expected link draft"),
        }
    }

    #[test]
    fn test_edit_draft_rejects_url_on_folder() {
        let args = EditArgs {
            url: Some("https://x".to_string()),
            ..edit_args()
        };
        let folder = Node::from(Folder::new("Work", None));
        assert!(edit_draft(&folder, &args).is_err());
    }
}
