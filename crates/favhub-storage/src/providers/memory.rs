//! In-memory state store with an optional byte quota.

use std::collections::HashMap;

use favhub_core::error::AppError;
use favhub_core::result::AppResult;
use favhub_core::traits::storage::StateStore;

/// Volatile key/value store, mainly for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    /// Stored values.
    entries: HashMap<String, String>,
    /// Maximum total bytes of keys and values; unlimited when `None`.
    quota_bytes: Option<usize>,
}

impl MemoryStateStore {
    /// Create an unlimited store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that refuses writes beyond `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Total bytes currently used.
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl StateStore for MemoryStateStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if let Some(quota) = self.quota_bytes {
            let replaced = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > quota {
                return Err(AppError::storage(format!(
                    "Quota exceeded: writing '{key}' needs {needed} bytes, quota is {quota}"
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
