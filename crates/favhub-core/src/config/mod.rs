//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so that a missing
//! file yields a usable configuration.

pub mod logging;
pub mod notice;
pub mod storage;
pub mod view;

use serde::{Deserialize, Serialize};
use validator::Validate;

use self::logging::LoggingConfig;
use self::notice::NoticeConfig;
use self::storage::StorageConfig;
use self::view::ViewConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Persisted-state settings.
    #[serde(default)]
    #[validate(nested)]
    pub storage: StorageConfig,
    /// Browsing view settings.
    #[serde(default)]
    #[validate(nested)]
    pub view: ViewConfig,
    /// Transient status notice settings.
    #[serde(default)]
    #[validate(nested)]
    pub notice: NoticeConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load a base TOML file with an optional overlay file on top.
    ///
    /// Both files are optional. Environment variables prefixed with
    /// `FAVHUB` (sections separated by `__`, e.g.
    /// `FAVHUB__VIEW__PATH_DELIMITER`) override file values.
    pub fn load_layered(path: &str, overlay: Option<&str>) -> Result<Self, AppError> {
        let mut builder =
            config::Config::builder().add_source(config::File::with_name(path).required(false));
        if let Some(overlay) = overlay {
            builder = builder.add_source(config::File::with_name(overlay).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("FAVHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::view::PathPolicy;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage.state_key, "favoritesData");
        assert_eq!(config.view.path_delimiter, " > ");
        assert_eq!(config.view.unresolved_path, PathPolicy::Error);
        assert_eq!(config.notice.ttl_ms, 2000);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml_like(
            r#"
            [view]
            unresolved_path = "root"
            "#,
        );
        assert_eq!(config.view.unresolved_path, PathPolicy::Root);
        assert_eq!(config.view.click_render_delay_ms, 100);
        assert_eq!(config.storage.provider, "local");
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let mut config = AppConfig::default();
        config.view.path_delimiter = String::new();
        let err: AppError = config.validate().unwrap_err().into();
        assert_eq!(err.kind, crate::error::ErrorKind::Validation);
    }

    fn toml_like(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize")
    }
}
