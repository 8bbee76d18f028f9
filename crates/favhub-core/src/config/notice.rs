//! Transient status notice configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Controls how long auto-dismissing status notices stay visible.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NoticeConfig {
    /// Lifetime of a notice in milliseconds.
    #[serde(default = "default_ttl")]
    #[validate(range(min = 100, max = 60000))]
    pub ttl_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl(),
        }
    }
}

fn default_ttl() -> u64 {
    2000
}
