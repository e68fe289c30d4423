//! In-memory cache backend.
//!
//! Shares one `CacheStore` between requests behind a tokio `RwLock`.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheBackend, CacheStats, CacheStore};
use crate::error::CacheResult;

/// Thread-safe in-memory `CacheBackend` with TTL expiry and LRU eviction.
///
/// Cloning is cheap and every clone sees the same entries, which lets the
/// cleanup task hold its own handle.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryCache {
    /// Creates an empty cache holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(max_entries))),
        }
    }

    /// Drops every expired entry, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    /// Remaining lifetime of a live entry in milliseconds.
    pub async fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.store.read().await.ttl_remaining_ms(key)
    }

    /// Number of stored entries, expired ones not yet swept included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        // Write lock: a read touches the LRU order and the counters
        Ok(self.store.write().await.get(key))
    }

    async fn set_with_ttl(&self, key: &str, value: &[u8], ttl_seconds: u64) -> CacheResult<()> {
        self.store
            .write()
            .await
            .set(key, value.to_vec(), ttl_seconds)
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.store.write().await.delete(key);
        Ok(())
    }

    async fn stats(&self) -> Option<CacheStats> {
        Some(self.store.read().await.stats())
    }
}
