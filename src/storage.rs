//! Browser Storage
//!
//! String key-value stores and whole-collection JSON snapshots.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Minimal string key-value store (the shape of `window.localStorage`)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// Succeeds only if local storage can actually be reached
    pub fn open() -> Result<Self, StorageError> {
        Self::storage().map(|_| Self)
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// In-memory store, used when local storage is blocked and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The store the app actually runs on
#[derive(Debug, Clone)]
pub enum AppStorage {
    Browser(BrowserStorage),
    Memory(MemoryStore),
}

impl AppStorage {
    /// Local storage if reachable, otherwise a session-only memory store
    pub fn open() -> Self {
        match BrowserStorage::open() {
            Ok(browser) => AppStorage::Browser(browser),
            Err(err) => {
                log::warn!("[storage] {}; changes will last only for this session", err);
                AppStorage::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for AppStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            AppStorage::Browser(store) => store.get(key),
            AppStorage::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            AppStorage::Browser(store) => store.set(key, value),
            AppStorage::Memory(store) => store.set(key, value),
        }
    }
}

/// Read a JSON array snapshot. Missing key or `null` is an empty collection.
pub fn load_collection<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Vec<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    let parsed: Option<Vec<T>> = serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
        key: key.to_string(),
        source,
    })?;
    Ok(parsed.unwrap_or_default())
}

/// Overwrite the whole snapshot under `key`
pub fn save_collection<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

/// Load a collection, falling back to empty when the snapshot is unreadable
pub fn load_or_empty<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Vec<T> {
    match load_collection(store, key) {
        Ok(items) => items,
        Err(err) => {
            log::warn!("[storage] {}; starting with an empty collection", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Store whose writes always fail
    #[derive(Debug, Clone, Default)]
    pub struct ReadOnlyStore {
        pub inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }
}
