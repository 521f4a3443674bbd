//! Key-value backend abstraction behind the record store.

use crate::errors::AppResult;

/// Text blobs addressed by key.
///
/// Implementations only need whole-value reads and overwrites; the record
/// store rewrites an entire collection on every mutation.
pub trait KeyValueStore {
    /// Return the stored value, or `None` if the key was never written.
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> AppResult<()>;
}
