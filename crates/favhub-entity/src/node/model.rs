//! Folder and link node model.
//!
//! The serialized form is the persisted schema: an array of objects
//! tagged with `"type": "folder"` or `"type": "link"`. Runtime node ids
//! are not part of it.

use std::fmt;

use serde::{Deserialize, Serialize};

use favhub_core::types::NodeId;

/// Discriminant of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A folder containing other nodes.
    Folder,
    /// A bookmarked URL.
    Link,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "folder"),
            Self::Link => write!(f, "link"),
        }
    }
}

/// An entry in the bookmark tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A folder.
    Folder(Folder),
    /// A link.
    Link(Link),
}

/// A folder of nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Runtime identifier, regenerated on every load.
    #[serde(skip)]
    pub id: NodeId,
    /// Folder name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Child nodes in persisted order. Absent until something is put inside.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

/// A bookmarked URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Runtime identifier, regenerated on every load.
    #[serde(skip)]
    pub id: NodeId,
    /// Link name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Target URL.
    pub url: String,
    /// Optional icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// How many times the link was opened.
    #[serde(rename = "clickCount", default, skip_serializing_if = "is_zero")]
    pub click_count: u64,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

impl PartialEq for Folder {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.children() == other.children()
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.url == other.url
            && self.icon == other.icon
            && self.click_count == other.click_count
    }
}

impl Folder {
    /// Create an empty folder.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            description,
            children: None,
        }
    }

    /// Children in persisted order (empty when absent).
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Mutable children, created empty on first use.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        self.children.get_or_insert_with(Vec::new)
    }
}

impl Link {
    /// Create a link with a zero click count.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            description: None,
            url: url.into(),
            icon: None,
            click_count: 0,
        }
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Self::Folder(folder)
    }
}

impl From<Link> for Node {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

impl Node {
    /// Runtime identifier.
    pub fn id(&self) -> NodeId {
        match self {
            Self::Folder(f) => f.id,
            Self::Link(l) => l.id,
        }
    }

    /// Node name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(f) => &f.name,
            Self::Link(l) => &l.name,
        }
    }

    /// Node description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Folder(f) => f.description.as_deref(),
            Self::Link(l) => l.description.as_deref(),
        }
    }

    /// Node kind.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Folder(_) => NodeKind::Folder,
            Self::Link(_) => NodeKind::Link,
        }
    }

    /// Whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// Whether this node is a folder named `name`.
    pub fn is_folder_named(&self, name: &str) -> bool {
        matches!(self, Self::Folder(f) if f.name == name)
    }

    /// Click count of a link; folders count as zero.
    pub fn click_count(&self) -> u64 {
        match self {
            Self::Folder(_) => 0,
            Self::Link(l) => l.click_count,
        }
    }

    /// Borrow as a folder.
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Self::Folder(f) => Some(f),
            Self::Link(_) => None,
        }
    }

    /// Mutably borrow as a folder.
    pub fn as_folder_mut(&mut self) -> Option<&mut Folder> {
        match self {
            Self::Folder(f) => Some(f),
            Self::Link(_) => None,
        }
    }

    /// Mutably borrow as a link.
    pub fn as_link_mut(&mut self) -> Option<&mut Link> {
        match self {
            Self::Folder(_) => None,
            Self::Link(l) => Some(l),
        }
    }

    /// Child nodes (empty for links).
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Folder(f) => f.children(),
            Self::Link(_) => &[],
        }
    }

    /// Case-insensitive substring match against name, URL, and description.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle);
        let own = hit(self.name()) || self.description().is_some_and(hit);
        match self {
            Self::Folder(_) => own,
            Self::Link(l) => own || hit(&l.url),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Node::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_persisted_schema() {
        let json = r#"[
            {"type": "folder", "name": "Daily", "description": "often", "children": [
                {"type": "link", "name": "Canva", "url": "https://www.canva.com/", "clickCount": 4}
            ]},
            {"type": "link", "name": "GitHub", "url": "https://github.com"}
        ]"#;
        let nodes: Vec<Node> = serde_json::from_str(json).expect("parse");
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].is_folder_named("Daily"));
        assert_eq!(nodes[0].children()[0].click_count(), 4);
        assert_eq!(nodes[1].click_count(), 0);
        assert_eq!(nodes[1].description(), None);
    }

    #[test]
    fn test_serialization_omits_defaults_and_ids() {
        let node = Node::from(Link::new("GitHub", "https://github.com"));
        let json = serde_json::to_value(&node).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"type": "link", "name": "GitHub", "url": "https://github.com"})
        );
    }

    #[test]
    fn test_equality_ignores_ids() {
        let a = Node::from(Folder::new("Work", None));
        let b = Node::from(Folder::new("Work", None));
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }

    #[test]
    fn test_children_created_lazily() {
        let mut folder = Folder::new("Empty", None);
        assert!(folder.children.is_none());
        assert!(folder.children().is_empty());
        folder.children_mut().push(Link::new("a", "https://a").into());
        assert_eq!(folder.children().len(), 1);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let mut link = Link::new("Docs", "https://example.com");
        link.description = Some("A LEGIT tool".to_string());
        let node = Node::from(link);
        assert!(node.matches("git"));
        assert!(node.matches("example"));
        assert!(!node.matches("missing"));

        let folder = Node::from(Folder::new("Scripts", None));
        assert!(!folder.matches("git"));
        assert!(folder.matches("scr"));
    }

    #[test]
    fn test_subtree_len() {
        let mut folder = Folder::new("Root", None);
        let mut inner = Folder::new("Inner", None);
        inner.children_mut().push(Link::new("x", "https://x").into());
        folder.children_mut().push(inner.into());
        folder.children_mut().push(Link::new("y", "https://y").into());
        assert_eq!(Node::from(folder).subtree_len(), 4);
    }
}
