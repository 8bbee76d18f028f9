//! Durable client-local key/value storage.

use crate::result::AppResult;

/// A synchronous key/value store for serialized state.
///
/// The bookmark tree is stored as one serialized value under one fixed
/// key. Implementations live in `favhub-storage`.
pub trait StateStore: std::fmt::Debug {
    /// Return the provider type name (e.g., "local", "memory").
    fn provider_type(&self) -> &str;

    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// A failed write (e.g., quota exceeded) returns a storage error and
    /// leaves the previously stored value in place.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value stored under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> AppResult<()>;
}
