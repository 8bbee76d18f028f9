//! Multi-selection over the currently rendered list.
//!
//! Indices only mean something for the list that produced them; the
//! session clears the set whenever that list changes identity.

use std::collections::BTreeSet;

/// A set of selected positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected indices, kept sorted.
    indices: BTreeSet<usize>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `index`.
    pub fn add(&mut self, index: usize) {
        self.indices.insert(index);
    }

    /// Deselect `index`.
    pub fn remove(&mut self, index: usize) {
        self.indices.remove(&index);
    }

    /// Flip `index`; returns whether it is now selected.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Select every index of a view with `len` items.
    pub fn select_all(&mut self, len: usize) {
        self.indices.extend(0..len);
    }

    /// Whether `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The selected indices.
    pub fn indices(&self) -> &BTreeSet<usize> {
        &self.indices
    }

    /// Selected indices, highest first (safe removal order).
    pub fn descending(&self) -> Vec<usize> {
        self.indices.iter().rev().copied().collect()
    }

    /// Rubber-band selection over a view of `len` items.
    ///
    /// Every index for which `hit` is true is selected. Without
    /// `additive`, every other index is deselected.
    pub fn apply_marquee(&mut self, len: usize, hit: impl Fn(usize) -> bool, additive: bool) {
        for index in 0..len {
            if hit(index) {
                self.indices.insert(index);
            } else if !additive {
                self.indices.remove(&index);
            }
        }
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}
