//! Cache backend trait
//!
//! The key/value contract the service needs from a cache: get, set with a
//! TTL, delete. No atomicity is promised across keys.

use async_trait::async_trait;

use crate::cache::CacheStats;
use crate::error::CacheResult;

/// Key/value store with per-key time-to-live.
///
/// Implementations must be safe to share between concurrent requests.
/// A key whose TTL has elapsed must read back as `None`, exactly like a
/// key that was never written.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns the live value stored under `key`, if any.
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, visible for `ttl_seconds`.
    async fn set_with_ttl(&self, key: &str, value: &[u8], ttl_seconds: u64) -> CacheResult<()>;

    /// Removes `key`. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Backend statistics, when the backend keeps any.
    async fn stats(&self) -> Option<CacheStats> {
        None
    }
}
