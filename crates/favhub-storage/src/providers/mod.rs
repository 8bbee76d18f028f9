//! State store provider implementations.

pub mod local;
pub mod memory;

pub use local::LocalStateStore;
pub use memory::MemoryStateStore;

use favhub_core::config::storage::StorageConfig;
use favhub_core::error::AppError;
use favhub_core::result::AppResult;
use favhub_core::traits::storage::StateStore;

/// Build the provider named by the storage configuration.
pub fn build_provider(config: &StorageConfig) -> AppResult<Box<dyn StateStore>> {
    match config.provider.as_str() {
        "local" => Ok(Box::new(LocalStateStore::new(&config.data_root)?)),
        "memory" => Ok(Box::new(match config.quota_bytes {
            Some(quota) => MemoryStateStore::with_quota(quota),
            None => MemoryStateStore::new(),
        })),
        other => Err(AppError::configuration(format!(
            "Unknown storage provider '{other}' (expected 'local' or 'memory')"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_memory_provider() {
        let config = StorageConfig {
            provider: "memory".to_string(),
            ..StorageConfig::default()
        };
        let store = build_provider(&config).expect("build");
        assert_eq!(store.provider_type(), "memory");
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let config = StorageConfig {
            provider: "s3".to_string(),
            ..StorageConfig::default()
        };
        let err = build_provider(&config).unwrap_err();
        assert_eq!(err.kind, favhub_core::error::ErrorKind::Configuration);
    }
}
