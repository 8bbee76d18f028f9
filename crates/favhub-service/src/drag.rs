//! Drag-and-drop state machine.
//!
//! A drag captures the dragged item and a snapshot of the selection at
//! drag start. A drop resolves to a [`DropAction`] that the service then
//! executes through the move engine.

use std::collections::BTreeSet;

use serde::Serialize;

use favhub_core::error::AppError;
use favhub_core::result::AppResult;

use crate::selection::Selection;

/// Where something was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "target", content = "index", rename_all = "snake_case")]
pub enum DropTarget {
    /// Onto the folder at this original index.
    IntoFolder(usize),
    /// Between items, before the item at this original index.
    InsertAt(usize),
    /// Onto the "up one level" zone.
    Parent,
    /// Onto breadcrumb `i` (`-1` is the root crumb).
    Breadcrumb(isize),
}

/// What a drop should do to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    /// Nothing to do.
    Nothing,
    /// The drop is not supported; the message explains why.
    Rejected(String),
    /// Move one item into a sibling folder.
    MoveToFolder { from: usize, to: usize },
    /// Move several items into a sibling folder.
    MoveManyToFolder { indices: BTreeSet<usize>, to: usize },
    /// Reorder one item within the folder; `to` is already adjusted.
    Reorder { from: usize, to: usize },
    /// Move one item to the parent folder.
    MoveToParent { from: usize },
    /// Move several items to the parent folder.
    MoveManyToParent { indices: BTreeSet<usize> },
    /// Move one item to the folder at breadcrumb `target`.
    MoveToPath { from: usize, target: isize },
    /// Move several items to the folder at breadcrumb `target`.
    MoveManyToPath { indices: BTreeSet<usize>, target: isize },
}

/// Drag progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Dragging `items`, started on `origin`.
    Dragging {
        /// The item the drag started on.
        origin: usize,
        /// The items being dragged (always contains `origin`).
        items: BTreeSet<usize>,
    },
}

impl DragState {
    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Start dragging `origin`.
    ///
    /// An item outside a non-empty selection replaces that selection.
    /// Dragging is disabled while searching.
    pub fn begin(&mut self, origin: usize, selection: &mut Selection, searching: bool) -> AppResult<()> {
        if searching {
            return Err(AppError::invalid_move("Items cannot be dragged while searching"));
        }
        if !selection.is_selected(origin) {
            selection.clear();
            selection.add(origin);
        }
        *self = Self::Dragging {
            origin,
            items: selection.indices().clone(),
        };
        Ok(())
    }

    /// Resolve a drop at `target` for a view `depth` levels below the root.
    pub fn drop_on(&self, target: DropTarget, depth: usize) -> DropAction {
        let Self::Dragging { origin, items } = self else {
            return DropAction::Nothing;
        };
        let origin = *origin;
        let many = items.len() > 1;

        match target {
            DropTarget::IntoFolder(to) if many => DropAction::MoveManyToFolder {
                indices: items.clone(),
                to,
            },
            DropTarget::IntoFolder(to) => DropAction::MoveToFolder { from: origin, to },
            DropTarget::InsertAt(_) if many => {
                DropAction::Rejected("Reordering multiple items is not supported".to_string())
            }
            DropTarget::InsertAt(index) => {
                let adjusted = if origin < index { index - 1 } else { index };
                if adjusted == origin {
                    DropAction::Nothing
                } else {
                    DropAction::Reorder {
                        from: origin,
                        to: adjusted,
                    }
                }
            }
            DropTarget::Parent if depth == 0 => DropAction::Nothing,
            DropTarget::Parent if many => DropAction::MoveManyToParent {
                indices: items.clone(),
            },
            DropTarget::Parent => DropAction::MoveToParent { from: origin },
            DropTarget::Breadcrumb(index) if index == depth as isize - 1 => DropAction::Nothing,
            DropTarget::Breadcrumb(target) if many => DropAction::MoveManyToPath {
                indices: items.clone(),
                target,
            },
            DropTarget::Breadcrumb(target) => DropAction::MoveToPath {
                from: origin,
                target,
            },
        }
    }

    /// Return to idle.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging(origin: usize, selection: &mut Selection) -> DragState {
        let mut drag = DragState::default();
        drag.begin(origin, selection, false).unwrap();
        drag
    }

    #[test]
    fn test_begin_on_unselected_replaces_selection() {
        let mut selection: Selection = [1, 2].into_iter().collect();
        let drag = dragging(4, &mut selection);
        assert_eq!(selection.descending(), vec![4]);
        assert_eq!(
            drag,
            DragState::Dragging {
                origin: 4,
                items: [4].into_iter().collect()
            }
        );
    }

    #[test]
    fn test_begin_on_selected_keeps_selection() {
        let mut selection: Selection = [1, 2].into_iter().collect();
        let drag = dragging(2, &mut selection);
        assert_eq!(selection.len(), 2);
        assert_eq!(
            drag.drop_on(DropTarget::IntoFolder(0), 0),
            DropAction::MoveManyToFolder {
                indices: [1, 2].into_iter().collect(),
                to: 0
            }
        );
    }

    #[test]
    fn test_begin_refused_while_searching() {
        let mut selection = Selection::new();
        let mut drag = DragState::default();
        assert!(drag.begin(0, &mut selection, true).is_err());
        assert!(!drag.is_dragging());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_insert_adjusts_forward_drops() {
        let mut selection = Selection::new();
        let drag = dragging(1, &mut selection);
        assert_eq!(
            drag.drop_on(DropTarget::InsertAt(4), 0),
            DropAction::Reorder { from: 1, to: 3 }
        );
        assert_eq!(
            drag.drop_on(DropTarget::InsertAt(0), 0),
            DropAction::Reorder { from: 1, to: 0 }
        );
        assert_eq!(drag.drop_on(DropTarget::InsertAt(2), 0), DropAction::Nothing);
        assert_eq!(drag.drop_on(DropTarget::InsertAt(1), 0), DropAction::Nothing);
    }

    #[test]
    fn test_insert_with_many_rejected() {
        let mut selection: Selection = [0, 1].into_iter().collect();
        let drag = dragging(0, &mut selection);
        assert!(matches!(
            drag.drop_on(DropTarget::InsertAt(3), 0),
            DropAction::Rejected(_)
        ));
    }

    #[test]
    fn test_parent_drop() {
        let mut selection = Selection::new();
        let drag = dragging(2, &mut selection);
        assert_eq!(drag.drop_on(DropTarget::Parent, 0), DropAction::Nothing);
        assert_eq!(
            drag.drop_on(DropTarget::Parent, 1),
            DropAction::MoveToParent { from: 2 }
        );
    }

    #[test]
    fn test_breadcrumb_drop_skips_active_crumb() {
        let mut selection = Selection::new();
        let drag = dragging(0, &mut selection);
        assert_eq!(drag.drop_on(DropTarget::Breadcrumb(1), 2), DropAction::Nothing);
        assert_eq!(
            drag.drop_on(DropTarget::Breadcrumb(0), 2),
            DropAction::MoveToPath { from: 0, target: 0 }
        );
        assert_eq!(
            drag.drop_on(DropTarget::Breadcrumb(-1), 2),
            DropAction::MoveToPath { from: 0, target: -1 }
        );
        assert_eq!(drag.drop_on(DropTarget::Breadcrumb(-1), 0), DropAction::Nothing);
    }

    #[test]
    fn test_drop_while_idle_and_end() {
        let mut selection = Selection::new();
        let mut drag = dragging(0, &mut selection);
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.drop_on(DropTarget::IntoFolder(1), 0), DropAction::Nothing);
    }
}
