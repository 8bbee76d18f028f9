//! Tree mutation events.

use serde::{Deserialize, Serialize};

/// Events describing a committed change to the bookmark tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TreeEvent {
    /// A node was added to a folder.
    Added {
        /// The new node's name.
        name: String,
        /// Ancestor folder names of the containing folder.
        path: Vec<String>,
    },
    /// A node's fields were edited.
    Updated {
        /// The node's (new) name.
        name: String,
    },
    /// One or more nodes were deleted.
    Deleted {
        /// Names of the deleted nodes.
        names: Vec<String>,
    },
    /// Nodes were moved into another sequence.
    Moved {
        /// Names of the moved nodes in their new relative order.
        names: Vec<String>,
        /// Human-readable destination label.
        destination: String,
    },
    /// A node changed position within its own sequence.
    Reordered {
        /// The node's name.
        name: String,
        /// Original index before the move.
        from: usize,
        /// Index after the move.
        to: usize,
    },
    /// A link was opened and its click count incremented.
    Clicked {
        /// The link's name.
        name: String,
        /// The new click count.
        click_count: u64,
    },
    /// The whole tree was replaced by an import.
    Imported {
        /// Number of nodes (recursive) in the imported tree.
        node_count: usize,
    },
}
