//! Load/save of the serialized tree under one fixed key.

use tracing::{debug, info, warn};

use favhub_core::result::AppResult;
use favhub_core::traits::storage::StateStore;
use favhub_entity::node::Node;

use crate::defaults::default_tree;

/// Where a loaded tree came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the stored value.
    Stored,
    /// Nothing was stored; the default tree was seeded.
    Seeded,
    /// The stored value was unreadable or corrupt; the default tree was used.
    Recovered,
}

/// Persists the root sequence through a [`StateStore`].
#[derive(Debug)]
pub struct PersistenceGateway {
    /// Underlying key/value store.
    store: Box<dyn StateStore>,
    /// Key the tree is stored under.
    key: String,
}

impl PersistenceGateway {
    /// Create a gateway over `store` using `key`.
    pub fn new(store: Box<dyn StateStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load the stored tree, falling back to the default tree.
    ///
    /// Absence, read failures, and parse failures are never fatal: they
    /// are logged and the built-in default tree is returned instead.
    pub fn load(&self) -> (Vec<Node>, LoadSource) {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!(key = %self.key, "No stored bookmarks, seeding defaults");
                return (default_tree(), LoadSource::Seeded);
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored bookmarks, using defaults");
                return (default_tree(), LoadSource::Recovered);
            }
        };

        match serde_json::from_str::<Vec<Node>>(&raw) {
            Ok(nodes) => {
                debug!(key = %self.key, roots = nodes.len(), "Loaded stored bookmarks");
                (nodes, LoadSource::Stored)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored bookmarks are corrupt, using defaults");
                (default_tree(), LoadSource::Recovered)
            }
        }
    }

    /// Serialize and store the full tree.
    pub fn save(&mut self, roots: &[Node]) -> AppResult<()> {
        let raw = serde_json::to_string(roots)?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, bytes = raw.len(), "Saved bookmarks");
        Ok(())
    }
}
