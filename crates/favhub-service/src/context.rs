//! View session carrying the current folder, search keyword, selection,
//! and drag state.

use serde::Serialize;

use favhub_core::error::AppError;
use favhub_core::result::AppResult;
use favhub_entity::search::SearchRecord;

use crate::drag::DragState;
use crate::selection::Selection;
use crate::tree::store::path_prefix;

/// Label of the root breadcrumb.
pub const HOME_LABEL: &str = "Home";

/// One breadcrumb of the current path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Breadcrumb position (`-1` is the root).
    pub index: isize,
    /// Folder name, or [`HOME_LABEL`] for the root.
    pub label: String,
    /// Whether this crumb is the folder being viewed.
    pub active: bool,
}

/// State of one browsing view.
///
/// Passed into every service operation so that the engine itself holds
/// no view state.
#[derive(Debug, Clone, Default)]
pub struct ViewSession {
    /// Folder names from the root to the viewed folder.
    current_path: Vec<String>,
    /// Active search keyword, already trimmed and non-empty.
    search: Option<String>,
    /// Selected positions in the rendered list.
    selection: Selection,
    /// Drag progress.
    drag: DragState,
}

impl ViewSession {
    /// A session viewing the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session viewing the folder at `path`.
    pub fn at_path(path: Vec<String>) -> Self {
        Self {
            current_path: path,
            ..Self::default()
        }
    }

    /// Folder names from the root to the viewed folder.
    pub fn current_path(&self) -> &[String] {
        &self.current_path
    }

    /// How many levels below the root the view is.
    pub fn depth(&self) -> usize {
        self.current_path.len()
    }

    /// Whether a search is active.
    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// The active search keyword.
    pub fn search_keyword(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Items selected in the current view.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Mutable access to the selection.
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// The drag in progress, if any.
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Mutable access to the drag state.
    pub fn drag_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }

    /// Split borrows for starting a drag.
    pub(crate) fn drag_parts(&mut self) -> (&mut DragState, &mut Selection, bool) {
        let searching = self.search.is_some();
        (&mut self.drag, &mut self.selection, searching)
    }

    /// Point the view at `path` after the tree moved under it.
    pub(crate) fn retarget(&mut self, path: Vec<String>) {
        self.current_path = path;
        self.clear_transient();
    }

    /// Forget the selection and any drag in progress.
    pub fn clear_transient(&mut self) {
        self.selection.clear();
        self.drag.end();
    }

    /// Descend into child folder `name`.
    pub fn open_folder(&mut self, name: impl Into<String>) {
        self.current_path.push(name.into());
        self.clear_transient();
    }

    /// Go up one level; returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        let moved = self.current_path.pop().is_some();
        if moved {
            self.clear_transient();
        }
        moved
    }

    /// Jump to breadcrumb `index` (`-1` is the root).
    pub fn navigate_to(&mut self, index: isize) -> AppResult<()> {
        let keep = path_prefix(&self.current_path, index)?.len();
        self.current_path.truncate(keep);
        self.clear_transient();
        Ok(())
    }

    /// Set the search keyword; a blank keyword ends the search.
    pub fn set_search(&mut self, keyword: &str) {
        let keyword = keyword.trim();
        self.search = (!keyword.is_empty()).then(|| keyword.to_string());
        self.clear_transient();
    }

    /// End the search.
    pub fn clear_search(&mut self) {
        self.search = None;
        self.clear_transient();
    }

    /// Open a folder found by search and leave search mode.
    pub fn open_search_result(&mut self, record: &SearchRecord) -> AppResult<()> {
        if !record.node.is_folder() {
            return Err(AppError::validation(format!(
                "'{}' is a link, not a folder",
                record.node.name()
            )));
        }
        let mut path = record.segments.clone();
        path.push(record.node.name().to_string());
        self.current_path = path;
        self.search = None;
        self.clear_transient();
        Ok(())
    }

    /// Back to the root with no search, selection, or drag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Plain or toggle click on item `index`; returns whether it ends up selected.
    ///
    /// A plain click on an item outside a non-empty selection clears the
    /// selection first.
    pub fn click(&mut self, index: usize, toggle: bool) -> bool {
        if !toggle && !self.selection.is_selected(index) {
            self.selection.clear();
        }
        if toggle {
            self.selection.toggle(index)
        } else {
            self.selection.add(index);
            true
        }
    }

    /// Breadcrumbs from the root to the viewed folder.
    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        let last = self.depth() as isize - 1;
        std::iter::once((-1, HOME_LABEL.to_string()))
            .chain(
                self.current_path
                    .iter()
                    .enumerate()
                    .map(|(i, name)| (i as isize, name.clone())),
            )
            .map(|(index, label)| Crumb {
                index,
                label,
                active: index == last,
            })
            .collect()
    }
}
