//! Local filesystem state store: one JSON file per key.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use favhub_core::error::{AppError, ErrorKind};
use favhub_core::result::AppResult;
use favhub_core::traits::storage::StateStore;

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct LocalStateStore {
    /// Directory holding the state files.
    root: PathBuf,
}

impl LocalStateStore {
    /// Create a store rooted at `root_path`, creating the directory if needed.
    pub fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create state directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a key to its file path.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(AppError::validation(format!("Invalid state key: '{key}'")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StateStore for LocalStateStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.resolve(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(key, bytes = value.len(), "Read state");
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read state: {key}"),
                e,
            )),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| {
                let _ = fs::remove_file(&tmp);
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to write state: {key}"),
                    e,
                )
            })?;

        debug!(key, bytes = value.len(), "Wrote state");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to remove state: {key}"),
                e,
            )),
        }
    }
}
