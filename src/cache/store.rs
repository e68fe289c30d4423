//! Cache Store Module
//!
//! Synchronous cache engine: HashMap storage with LRU tracking and TTL
//! expiration. `MemoryCache` wraps it in a lock to serve async callers.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, LruTracker, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{CacheError, CacheResult};

// == Cache Store ==
/// Main cache storage with LRU eviction and TTL support.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Set ==
    /// Stores a value under `key` for `ttl_seconds`.
    ///
    /// Overwriting an existing key replaces the value and restarts its TTL.
    /// If the cache is at capacity, the least recently used entry is evicted.
    pub fn set(&mut self, key: &str, value: Vec<u8>, ttl_seconds: u64) -> CacheResult<()> {
        if key.is_empty() || key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key must be 1 to {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let is_overwrite = self.entries.contains_key(key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            match self.lru.evict_oldest() {
                Some(evicted_key) => {
                    self.entries.remove(&evicted_key);
                    self.stats.record_eviction();
                }
                None => {
                    return Err(CacheError::CacheFull(
                        "Cache is full and eviction failed".to_string(),
                    ));
                }
            }
        }

        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl_seconds));
        self.lru.touch(key);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a live value by key.
    ///
    /// Absent and expired keys both return `None`; expired entries are
    /// dropped on the way out.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        let expired = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired(),
        };

        if expired {
            self.remove_entry(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.lru.touch(key);
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether a key was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove_entry(key)
    }

    // == TTL Remaining ==
    /// Remaining lifetime of a live entry in milliseconds.
    pub fn ttl_remaining_ms(&self, key: &str) -> Option<u64> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(CacheEntry::ttl_remaining_ms)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove_entry(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove_entry(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }
}
