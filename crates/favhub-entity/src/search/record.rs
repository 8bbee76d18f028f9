//! A flattened search match annotated with its location.

use serde::{Deserialize, Serialize};

use favhub_core::types::NodeId;

use crate::node::Node;

/// One search match: the node's fields plus where it lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Runtime id of the matched node in the live tree.
    #[serde(skip)]
    pub id: NodeId,
    /// A snapshot of the matched node.
    #[serde(flatten)]
    pub node: Node,
    /// Ancestor folder names joined by the view delimiter; root is `""`.
    pub path: String,
    /// Ancestor folder names from root.
    pub segments: Vec<String>,
}

impl SearchRecord {
    /// Build a record for `node` found under `segments`.
    pub fn new(node: &Node, segments: &[String], delimiter: &str) -> Self {
        Self {
            id: node.id(),
            node: node.clone(),
            path: segments.join(delimiter),
            segments: segments.to_vec(),
        }
    }

    /// Whether the match sits directly in the root sequence.
    pub fn is_at_root(&self) -> bool {
        self.segments.is_empty()
    }
}
