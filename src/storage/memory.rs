//! In-memory key-value store.

use rustc_hash::FxHashMap;

use super::{KeyValueStore, StorageError};

/// Key-value store backed by a hash map.
///
/// Cloning snapshots the current contents, which lets tests simulate a
/// page reload by building a fresh `CardStore` over a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: FxHashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot pre-populated.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(key.into(), value.into());
        storage
    }

    /// Make every subsequent `get` fail, as a locked or unmounted disk would.
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent `set` fail, as a full or read-only disk would.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Io(std::io::Error::other("reads disabled")));
        }
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io(std::io::Error::other("writes disabled")));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);

        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_failing_writes_keep_old_value() {
        let mut storage = MemoryStorage::with_value("k", "old");
        storage.set_fail_writes(true);

        assert!(storage.set("k", "new").is_err());
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("old"));
    }

    #[test]
    fn test_failing_reads_keep_value() {
        let mut storage = MemoryStorage::with_value("k", "kept");
        storage.set_fail_reads(true);
        assert!(matches!(storage.get("k"), Err(StorageError::Io(_))));

        storage.set_fail_reads(false);
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_clone_is_snapshot() {
        let mut storage = MemoryStorage::with_value("k", "a");
        let snapshot = storage.clone();
        storage.set("k", "b").unwrap();

        assert_eq!(snapshot.get("k").unwrap().as_deref(), Some("a"));
    }
}
