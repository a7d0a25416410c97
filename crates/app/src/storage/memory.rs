//! In-memory store.

use std::sync::RwLock;

use rustc_hash::FxHashMap;

use crate::storage::{KeyValueStore, StorageError};

/// Process-local store; contents vanish when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_err| StorageError::Poisoned)?;

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_err| StorageError::Poisoned)?;

        entries.insert(key.to_string(), value.to_string());

        Ok(())
    }
}
