//! Cache Store Module
//!
//! Unlocked HashMap storage. Locking lives in [`crate::cache::Cache`].

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage of response bodies keyed by request URL.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and resetting its age.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the stored bytes, regardless of the entry's age.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Removes every entry that is stale at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant, expiry: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale_at(now, expiry));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const EXPIRY: Duration = Duration::from_secs(5);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = CacheStore::new();

        store.insert("key1".to_string(), b"value1".to_vec());

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new();
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_get_returns_copy() {
        let mut store = CacheStore::new();
        store.insert("key1".to_string(), b"value1".to_vec());

        let mut copy = store.get("key1").unwrap();
        copy.clear();

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.insert("key1".to_string(), b"value1".to_vec());
        store.insert("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_reap_keeps_fresh_entries() {
        let mut store = CacheStore::new();
        store.insert("key1".to_string(), b"value1".to_vec());

        let removed = store.reap(Instant::now() + Duration::from_secs(4), EXPIRY);

        assert_eq!(removed, 0);
        assert!(store.get("key1").is_some());
    }

    #[test]
    fn test_store_reap_removes_stale_entries() {
        let mut store = CacheStore::new();
        store.insert("key1".to_string(), b"value1".to_vec());
        store.insert("key2".to_string(), b"value2".to_vec());

        let removed = store.reap(Instant::now() + EXPIRY, EXPIRY);

        assert_eq!(removed, 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_reap_before_insert_keeps_entry() {
        let mut store = CacheStore::new();
        let tick = Instant::now();
        store.insert("late".to_string(), b"value".to_vec());

        // A sweep stamped before the insert must not see the entry as aged
        assert_eq!(store.reap(tick, EXPIRY), 0);
        assert_eq!(store.len(), 1);
    }
}
