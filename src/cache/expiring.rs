//! Expiring Cache Module
//!
//! Thread-safe handle over a [`CacheStore`] with its own background reaper.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::CacheStore;
use crate::tasks::spawn_reap_task;

// == Cache ==
/// Self-cleaning key/value store keyed by request URL.
///
/// Readers share the lock; `add` and the reaper take it exclusively. Expiry
/// is enforced only by the reaper, so `get` may return an entry that is past
/// its window but not yet swept.
///
/// The reaper is cancelled by [`Cache::stop`] or when the cache is dropped.
#[derive(Debug)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    expiry_interval: Duration,
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn new(expiry_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reap_task(store.clone(), expiry_interval);

        Self {
            store,
            expiry_interval,
            reaper,
        }
    }

    // == Add ==
    /// Inserts or overwrites `key`, stamping it with the current time.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        self.store.write().await.insert(key, value);
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.read().await.get(key)
    }

    /// Number of entries currently held.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Age at which the reaper removes an entry.
    pub fn expiry_interval(&self) -> Duration {
        self.expiry_interval
    }

    // == Stop ==
    /// Cancels the reaper. Entries already stored stay readable but no longer expire.
    pub fn stop(&self) {
        self.reaper.abort();
    }

    /// Whether the reaper task is still running.
    pub fn is_reaping(&self) -> bool {
        !self.reaper.is_finished()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
