//! Persisted-state storage configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where and under which key the bookmark tree is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StorageConfig {
    /// State store provider: `"local"` (directory on disk) or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Root directory for the local provider.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Key the serialized tree is stored under.
    #[serde(default = "default_state_key")]
    #[validate(length(min = 1))]
    pub state_key: String,
    /// File name prefix used for exports (`<prefix>-YYYY-MM-DD.json`).
    #[serde(default = "default_export_prefix")]
    #[validate(length(min = 1))]
    pub export_prefix: String,
    /// Byte quota for the memory provider; unlimited when absent.
    #[serde(default)]
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            data_root: default_data_root(),
            state_key: default_state_key(),
            export_prefix: default_export_prefix(),
            quota_bytes: None,
        }
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_state_key() -> String {
    "favoritesData".to_string()
}

fn default_export_prefix() -> String {
    "favorites".to_string()
}
