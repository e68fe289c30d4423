//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired entries out of the
//! memory cache. Reads already treat expired entries as absent; the sweep
//! only reclaims memory for keys nobody reads again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that removes expired cache entries every
/// `cleanup_interval_secs` seconds.
///
/// Returns the task's JoinHandle so it can be aborted during graceful
/// shutdown.
///
/// # Example
/// ```ignore
/// let cache = MemoryCache::new(1000);
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: MemoryCache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheBackend;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = MemoryCache::new(100);
        cache.set_with_ttl("students:1", b"alice", 1).await.unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Entry expires at 1s, the sweep runs at 1s and 2s
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(cache.len().await, 0, "Expired entry should have been swept");
        assert_eq!(cache.stats().await.unwrap().expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = MemoryCache::new(100);
        cache
            .set_with_ttl("students:all", b"[]", 3600)
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            cache.get("students:all").await.unwrap(),
            Some(b"[]".to_vec())
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(MemoryCache::new(100), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
