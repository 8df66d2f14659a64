use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// String key-value storage with `get/set/remove`, in the shape of browser
/// `localStorage`
///
/// Injected into whatever needs persistence so the discovery engine itself
/// never reaches for global state.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// Typed JSON helpers over any [`KeyValueStore`]
pub trait JsonStoreExt: KeyValueStore {
    /// Get and decode a value; `Ok(None)` when the key is absent
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key) {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Encode and set a value
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.set(key, json);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> JsonStoreExt for S {}

/// In-memory store
///
/// Entries expire after `ttl_secs` without access and the oldest are evicted
/// past `capacity`, so abandoned entries do not pile up.
pub struct MemoryStore {
    entries: moka::sync::Cache<String, String>,
}

impl MemoryStore {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::sync::Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let value = self.entries.get(key);
        tracing::trace!("Store {}: {}", if value.is_some() { "hit" } else { "miss" }, key);
        value
    }

    fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        tracing::trace!("Store set: {}", key);
    }

    fn remove(&self, key: &str) {
        self.entries.invalidate(key);
    }
}
