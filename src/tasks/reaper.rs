//! Cache Reap Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Shortest tick the reaper will run at. Zero-length periods are not allowed by tokio.
const MIN_REAP_PERIOD: Duration = Duration::from_millis(1);

/// Spawns a background task that sweeps stale entries every `expiry`.
///
/// Each tick takes the write lock once, removes every entry at least `expiry`
/// old relative to the tick instant, and releases the lock before waiting
/// again. An entry therefore lives between `expiry` and `2 * expiry`.
///
/// # Arguments
/// * `store` - Shared store owned by a [`crate::cache::Cache`]
/// * `expiry` - Expiry window, also used as the tick period
///
/// # Returns
/// A JoinHandle for the spawned task. Aborting it stops the sweeps.
pub fn spawn_reap_task(store: Arc<RwLock<CacheStore>>, expiry: Duration) -> JoinHandle<()> {
    let period = expiry.max(MIN_REAP_PERIOD);

    tokio::spawn(async move {
        debug!(?expiry, "Starting cache reap task");

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let tick = ticker.tick().await;

            let (removed, remaining) = {
                let mut guard = store.write().await;
                let removed = guard.reap(tick, expiry);
                (removed, guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "Cache reap: removed stale entries");
            } else {
                debug!(remaining, "Cache reap: nothing to remove");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reap_task_removes_stale_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        store
            .write()
            .await
            .insert("expire_soon".to_string(), b"value".to_vec());

        let handle = spawn_reap_task(store.clone(), Duration::from_secs(1));

        time::sleep(Duration::from_millis(1500)).await;

        assert!(
            store.read().await.get("expire_soon").is_none(),
            "Stale entry should have been reaped"
        );

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_task_preserves_fresh_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let handle = spawn_reap_task(store.clone(), Duration::from_secs(10));

        time::sleep(Duration::from_secs(8)).await;
        store
            .write()
            .await
            .insert("fresh".to_string(), b"value".to_vec());

        // First tick at 10s sees a 2s old entry
        time::sleep(Duration::from_secs(3)).await;

        assert_eq!(store.read().await.get("fresh"), Some(b"value".to_vec()));

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_task_tolerates_zero_expiry() {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        store
            .write()
            .await
            .insert("gone".to_string(), b"value".to_vec());

        let handle = spawn_reap_task(store.clone(), Duration::ZERO);
        time::sleep(Duration::from_millis(5)).await;

        assert!(store.read().await.is_empty());
        handle.abort();
    }

    #[tokio::test]
    async fn test_reap_task_can_be_aborted() {
        let store = Arc::new(RwLock::new(CacheStore::new()));

        let handle = spawn_reap_task(store, Duration::from_secs(1));

        handle.abort();

        time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
