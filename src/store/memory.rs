//! In-memory backend, used by tests and by embedders that bring their own persistence.

use crate::errors::{AppError, AppResult};
use crate::store::kv::KeyValueStore;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. to simulate data written by another client.
    pub fn with_raw(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Reject every subsequent write with `StorageUnavailable`.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::StorageUnavailable(format!(
                "memory store is read-only (key '{key}')"
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
