//! Add/edit form input for nodes.
//!
//! Drafts are trimmed before validation; blank optional fields become
//! absent and blank required fields are rejected.

use serde::{Deserialize, Serialize};
use validator::Validate;

use favhub_core::error::AppError;
use favhub_core::result::AppResult;

use super::model::{Folder, Link, Node};

/// Form input for a folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FolderDraft {
    /// Folder name (required).
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Form input for a link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LinkDraft {
    /// Link name (required).
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Target URL (required).
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional icon URL.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Form input for either node kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeDraft {
    /// A folder draft.
    Folder(FolderDraft),
    /// A link draft.
    Link(LinkDraft),
}

fn trim_required(value: String) -> String {
    value.trim().to_string()
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl NodeDraft {
    /// The draft's (untrimmed) name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(d) => &d.name,
            Self::Link(d) => &d.name,
        }
    }

    /// Trim every field and drop blank optional ones.
    pub fn normalized(self) -> Self {
        match self {
            Self::Folder(d) => Self::Folder(FolderDraft {
                name: trim_required(d.name),
                description: trim_optional(d.description),
            }),
            Self::Link(d) => Self::Link(LinkDraft {
                name: trim_required(d.name),
                url: trim_required(d.url),
                description: trim_optional(d.description),
                icon: trim_optional(d.icon),
            }),
        }
    }

    /// Normalize and validate, returning the cleaned draft.
    pub fn validated(self) -> AppResult<Self> {
        let draft = self.normalized();
        match &draft {
            Self::Folder(d) => d.validate()?,
            Self::Link(d) => d.validate()?,
        }
        Ok(draft)
    }

    /// Build a new node from the draft.
    pub fn into_node(self) -> AppResult<Node> {
        let node = match self.validated()? {
            Self::Folder(d) => {
                let mut folder = Folder::new(d.name, d.description);
                folder.children = Some(Vec::new());
                Node::Folder(folder)
            }
            Self::Link(d) => {
                let mut link = Link::new(d.name, d.url);
                link.description = d.description;
                link.icon = d.icon;
                Node::Link(link)
            }
        };
        Ok(node)
    }

    /// Overwrite an existing node's editable fields.
    ///
    /// Click counts, children, and the node id are kept.
    pub fn apply_to(self, node: &mut Node) -> AppResult<()> {
        match (self.validated()?, node) {
            (Self::Folder(d), Node::Folder(folder)) => {
                folder.name = d.name;
                folder.description = d.description;
            }
            (Self::Link(d), Node::Link(link)) => {
                link.name = d.name;
                link.url = d.url;
                link.description = d.description;
                link.icon = d.icon;
            }
            (_, node) => {
                return Err(AppError::validation(format!(
                    "Cannot edit {} '{}' with a different kind of form",
                    node.kind(),
                    node.name()
                )));
            }
        }
        Ok(())
    }
}
