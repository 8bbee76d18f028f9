//! A node in display order, tagged with its storage position.

use serde::Serialize;

use crate::node::Node;

/// A node borrowed from the live tree for rendering.
///
/// `original_index` is the node's position in its parent's children
/// sequence; every mutating operation is addressed by it, never by the
/// display position.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DisplayItem<'a> {
    /// Position in the persisted children sequence.
    pub original_index: usize,
    /// The node itself.
    pub node: &'a Node,
}
