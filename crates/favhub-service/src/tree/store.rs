//! The tree store: exclusive owner of the root sequence.
//!
//! Folders are addressed by name paths from the root. Resolution takes
//! the first folder with each name, so duplicate sibling folder names
//! shadow one another.

use tracing::warn;

use favhub_core::config::view::PathPolicy;
use favhub_core::error::AppError;
use favhub_core::result::AppResult;
use favhub_core::types::NodeId;
use favhub_entity::node::{Folder, Node};

/// Where a node currently sits in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLocation {
    /// Ancestor folder names from root.
    pub path: Vec<String>,
    /// Indices of those ancestor folders, one per level.
    pub chain: Vec<usize>,
    /// Index within the containing children sequence.
    pub index: usize,
}

/// Owns the bookmark tree.
#[derive(Debug, Clone)]
pub struct TreeStore {
    /// The root sequence.
    roots: Vec<Node>,
    /// What to do with unresolvable paths.
    policy: PathPolicy,
}

/// Slice `path` up to and including breadcrumb `index`; `-1` is the root.
pub fn path_prefix(path: &[String], index: isize) -> AppResult<&[String]> {
    if index == -1 {
        return Ok(&[]);
    }
    usize::try_from(index)
        .ok()
        .filter(|&i| i < path.len())
        .map(|i| &path[..=i])
        .ok_or_else(|| AppError::not_found(format!("No breadcrumb at position {index}")))
}

/// The parent of `path`; the root is its own parent.
pub fn parent_path(path: &[String]) -> &[String] {
    &path[..path.len().saturating_sub(1)]
}

fn walk_mut<'a>(roots: &'a mut Vec<Node>, chain: &[usize]) -> Option<&'a mut Vec<Node>> {
    let mut items = roots;
    for &i in chain {
        items = items.get_mut(i)?.as_folder_mut().map(Folder::children_mut)?;
    }
    Some(items)
}

fn find_in(items: &[Node], id: NodeId, location: &mut NodeLocation) -> bool {
    for (index, node) in items.iter().enumerate() {
        if node.id() == id {
            location.index = index;
            return true;
        }
        if let Node::Folder(folder) = node {
            location.path.push(folder.name.clone());
            location.chain.push(index);
            if find_in(folder.children(), id, location) {
                return true;
            }
            location.path.pop();
            location.chain.pop();
        }
    }
    false
}

impl TreeStore {
    /// Take ownership of a tree.
    pub fn new(roots: Vec<Node>, policy: PathPolicy) -> Self {
        Self { roots, policy }
    }

    /// The root sequence.
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Replace the whole tree, returning the previous one.
    pub fn replace(&mut self, roots: Vec<Node>) -> Vec<Node> {
        std::mem::replace(&mut self.roots, roots)
    }

    /// Total number of nodes, recursively.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    /// Indices of the folders named by `path`, or `None` if a segment is missing.
    pub fn locate_path(&self, path: &[String]) -> Option<Vec<usize>> {
        let mut items: &[Node] = &self.roots;
        let mut chain = Vec::with_capacity(path.len());
        for name in path {
            let index = items.iter().position(|n| n.is_folder_named(name))?;
            chain.push(index);
            items = items[index].children();
        }
        Some(chain)
    }

    fn unresolved(&self, path: &[String]) -> AppResult<()> {
        match self.policy {
            PathPolicy::Root => {
                warn!(path = %path.join("/"), "Folder path not found, falling back to root");
                Ok(())
            }
            PathPolicy::Error => Err(AppError::not_found(format!(
                "Folder path '{}' not found",
                path.join("/")
            ))),
        }
    }

    /// Read-only children of the folder at `path`.
    pub fn children(&self, path: &[String]) -> AppResult<&[Node]> {
        match self.locate_path(path) {
            Some(chain) => {
                let mut items: &[Node] = &self.roots;
                for index in chain {
                    items = items[index].children();
                }
                Ok(items)
            }
            None => {
                self.unresolved(path)?;
                Ok(&self.roots)
            }
        }
    }

    /// Mutable children of the folder at `path`.
    ///
    /// Missing `children` arrays along the way are created empty.
    pub fn resolve_path(&mut self, path: &[String]) -> AppResult<&mut Vec<Node>> {
        match self.locate_path(path) {
            Some(chain) => walk_mut(&mut self.roots, &chain).ok_or_else(|| {
                AppError::internal(format!("Folder path '{}' changed during resolution", path.join("/")))
            }),
            None => {
                self.unresolved(path)?;
                Ok(&mut self.roots)
            }
        }
    }

    /// Children of the currently viewed folder.
    pub fn current_children(&mut self, current_path: &[String]) -> AppResult<&mut Vec<Node>> {
        self.resolve_path(current_path)
    }

    /// Children of the currently viewed folder's parent.
    pub fn parent_children(&mut self, current_path: &[String]) -> AppResult<&mut Vec<Node>> {
        self.resolve_path(parent_path(current_path))
    }

    /// Children of the folder at breadcrumb `index` (`-1` is the root).
    pub fn children_at_path_index(
        &mut self,
        current_path: &[String],
        index: isize,
    ) -> AppResult<&mut Vec<Node>> {
        let prefix = path_prefix(current_path, index)?;
        self.resolve_path(prefix)
    }

    /// Find a node by runtime id.
    pub fn locate(&self, id: NodeId) -> Option<NodeLocation> {
        let mut location = NodeLocation {
            path: Vec::new(),
            chain: Vec::new(),
            index: 0,
        };
        find_in(&self.roots, id, &mut location).then_some(location)
    }

    /// Borrow a node by runtime id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let location = self.locate(id)?;
        let mut items: &[Node] = &self.roots;
        for index in location.chain {
            items = items[index].children();
        }
        items.get(location.index)
    }

    /// Mutably borrow a node by runtime id.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let location = self.locate(id)?;
        walk_mut(&mut self.roots, &location.chain)?.get_mut(location.index)
    }

    /// The sequence containing node `id` and the node's index in it.
    pub fn container_of(&mut self, id: NodeId) -> Option<(&mut Vec<Node>, usize)> {
        let location = self.locate(id)?;
        let items = walk_mut(&mut self.roots, &location.chain)?;
        Some((items, location.index))
    }
}
