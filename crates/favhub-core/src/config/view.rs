//! Browsing view configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// What path resolution does when a folder name cannot be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPolicy {
    /// Fail with a not-found error.
    #[default]
    Error,
    /// Silently fall back to the root sequence.
    Root,
}

/// Browsing view settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ViewConfig {
    /// Behavior for unresolvable folder paths.
    #[serde(default)]
    pub unresolved_path: PathPolicy,
    /// Separator used when rendering a search result's ancestor path.
    #[serde(default = "default_delimiter")]
    #[validate(length(min = 1))]
    pub path_delimiter: String,
    /// Delay before re-rendering after a link's click count changes.
    #[serde(default = "default_click_render_delay")]
    #[validate(range(max = 5000))]
    pub click_render_delay_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            unresolved_path: PathPolicy::default(),
            path_delimiter: default_delimiter(),
            click_render_delay_ms: default_click_render_delay(),
        }
    }
}

fn default_delimiter() -> String {
    " > ".to_string()
}

fn default_click_render_delay() -> u64 {
    100
}
