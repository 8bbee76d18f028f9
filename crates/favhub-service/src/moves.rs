//! Relocating and reordering nodes of the currently viewed folder.
//!
//! Every index here is an original (storage) index into the current
//! folder's children, never a display position. Each operation removes
//! before it appends, and batches remove from the highest index down so
//! that pending indices stay valid.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use favhub_core::error::AppError;
use favhub_core::result::AppResult;
use favhub_entity::node::Node;

use crate::tree::store::{parent_path, path_prefix};
use crate::tree::TreeStore;

/// Label used for the root in destination names.
pub const ROOT_LABEL: &str = "Home";

/// Where moved nodes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Into the folder at this original index of the current folder.
    Folder(usize),
    /// Into the current folder's parent.
    Parent,
    /// Into the folder at this breadcrumb position (`-1` is the root).
    PathIndex(isize),
}

/// What a successful move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Names of the moved nodes, in their new relative order.
    pub moved: Vec<String>,
    /// Name of the destination folder.
    pub destination: String,
}

impl MoveReport {
    /// Status line naming what moved where.
    pub fn message(&self) -> String {
        match self.moved.as_slice() {
            [name] => format!("Moved \"{name}\" to \"{}\"", self.destination),
            moved => format!("Moved {} items to \"{}\"", moved.len(), self.destination),
        }
    }
}

/// What a successful reorder did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderReport {
    /// Name of the reordered node.
    pub name: String,
    /// Index before the move.
    pub from: usize,
    /// Index after the move.
    pub to: usize,
}

fn check_index(items: &[Node], index: usize) -> AppResult<()> {
    if index < items.len() {
        Ok(())
    } else {
        Err(AppError::invalid_move(format!(
            "No item at position {index} (folder has {} items)",
            items.len()
        )))
    }
}

fn check_folder_target(items: &[Node], index: usize) -> AppResult<()> {
    check_index(items, index)?;
    if items[index].is_folder() {
        Ok(())
    } else {
        Err(AppError::invalid_move(format!(
            "'{}' is not a folder",
            items[index].name()
        )))
    }
}

fn warn_on_duplicate_folders(destination: &[Node], moved: &[Node]) {
    for node in moved.iter().filter(|n| n.is_folder()) {
        if destination.iter().any(|d| d.is_folder_named(node.name())) {
            warn!(
                folder = node.name(),
                "Moved folder shares its name with a sibling; path lookups will find the first"
            );
        }
    }
}

/// Remove `descending` indices, returning the nodes in ascending original order.
fn take_descending(items: &mut Vec<Node>, descending: &[usize]) -> Vec<Node> {
    let mut taken: Vec<Node> = descending.iter().map(|&i| items.remove(i)).collect();
    taken.reverse();
    taken
}

fn path_label(path: &[String]) -> String {
    path.last().cloned().unwrap_or_else(|| ROOT_LABEL.to_string())
}

/// Move one node into a sibling folder.
pub fn move_to_folder(
    store: &mut TreeStore,
    current_path: &[String],
    from: usize,
    to_folder: usize,
) -> AppResult<MoveReport> {
    let items = store.current_children(current_path)?;
    check_index(items, from)?;
    check_folder_target(items, to_folder)?;
    if from == to_folder {
        return Err(AppError::invalid_move("Cannot move a folder into itself"));
    }

    let node = items.remove(from);
    let to_folder = if from < to_folder { to_folder - 1 } else { to_folder };
    let folder = items[to_folder]
        .as_folder_mut()
        .ok_or_else(|| AppError::internal("Move target stopped being a folder"))?;

    warn_on_duplicate_folders(folder.children(), std::slice::from_ref(&node));
    let report = MoveReport {
        moved: vec![node.name().to_string()],
        destination: folder.name.clone(),
    };
    folder.children_mut().push(node);
    Ok(report)
}

/// Move one node into the parent folder. Does nothing at the root.
pub fn move_to_parent(
    store: &mut TreeStore,
    current_path: &[String],
    from: usize,
) -> AppResult<Option<MoveReport>> {
    if current_path.is_empty() {
        return Ok(None);
    }
    relocate(store, current_path, &[from], parent_path(current_path)).map(Some)
}

/// Move one node into the folder at breadcrumb `target` (`-1` is the root).
pub fn move_to_path_index(
    store: &mut TreeStore,
    current_path: &[String],
    from: usize,
    target: isize,
) -> AppResult<MoveReport> {
    let destination = path_prefix(current_path, target)
        .map_err(|e| AppError::invalid_move(e.message))?;
    relocate(store, current_path, &[from], destination)
}

/// Move a node to another position in the same folder.
///
/// `to` is the final index after removal; callers translating a drop
/// position must subtract one when dropping after the original position.
/// Returns `None` when `from == to`.
pub fn reorder(
    store: &mut TreeStore,
    current_path: &[String],
    from: usize,
    to: usize,
) -> AppResult<Option<ReorderReport>> {
    let items = store.current_children(current_path)?;
    check_index(items, from)?;
    check_index(items, to)?;
    if from == to {
        return Ok(None);
    }

    let node = items.remove(from);
    let name = node.name().to_string();
    items.insert(to, node);
    Ok(Some(ReorderReport { name, from, to }))
}

/// Move several nodes of the current folder at once.
///
/// Relative order among the moved nodes is preserved. A destination
/// folder's own index is skipped. Returns `None` for a parent move at
/// the root.
pub fn move_many(
    store: &mut TreeStore,
    current_path: &[String],
    indices: &BTreeSet<usize>,
    destination: Destination,
) -> AppResult<Option<MoveReport>> {
    let descending: Vec<usize> = indices.iter().rev().copied().collect();
    match destination {
        Destination::Folder(to_folder) => {
            move_many_to_folder(store, current_path, &descending, to_folder).map(Some)
        }
        Destination::Parent => {
            if current_path.is_empty() {
                return Ok(None);
            }
            relocate(store, current_path, &descending, parent_path(current_path)).map(Some)
        }
        Destination::PathIndex(target) => {
            let destination = path_prefix(current_path, target)
                .map_err(|e| AppError::invalid_move(e.message))?;
            relocate(store, current_path, &descending, destination).map(Some)
        }
    }
}

fn move_many_to_folder(
    store: &mut TreeStore,
    current_path: &[String],
    descending: &[usize],
    to_folder: usize,
) -> AppResult<MoveReport> {
    let items = store.current_children(current_path)?;
    check_folder_target(items, to_folder)?;
    for &index in descending {
        check_index(items, index)?;
    }

    let picked: Vec<usize> = descending
        .iter()
        .copied()
        .filter(|&i| i != to_folder)
        .collect();
    if picked.is_empty() {
        return Err(AppError::invalid_move("Cannot move a folder into itself"));
    }

    let shift = picked.iter().filter(|&&i| i < to_folder).count();
    let moved = take_descending(items, &picked);
    let folder = items[to_folder - shift]
        .as_folder_mut()
        .ok_or_else(|| AppError::internal("Move target stopped being a folder"))?;

    warn_on_duplicate_folders(folder.children(), &moved);
    let report = MoveReport {
        moved: moved.iter().map(|n| n.name().to_string()).collect(),
        destination: folder.name.clone(),
    };
    folder.children_mut().extend(moved);
    Ok(report)
}

/// Remove `descending` from the current folder and append them to the
/// sequence at `destination`, an ancestor path of the current folder.
fn relocate(
    store: &mut TreeStore,
    current_path: &[String],
    descending: &[usize],
    destination: &[String],
) -> AppResult<MoveReport> {
    // Resolve the destination before removing anything. Ancestor
    // resolution never looks inside the current folder, so it still
    // resolves the same way after the removal below.
    store.children(destination)?;

    let items = store.current_children(current_path)?;
    for &index in descending {
        check_index(items, index)?;
    }
    if descending.is_empty() {
        return Err(AppError::invalid_move("Nothing selected to move"));
    }
    let moved = take_descending(items, descending);

    let target = store.resolve_path(destination)?;
    warn_on_duplicate_folders(target, &moved);
    let report = MoveReport {
        moved: moved.iter().map(|n| n.name().to_string()).collect(),
        destination: path_label(destination),
    };
    target.extend(moved);
    Ok(report)
}
