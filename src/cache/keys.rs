//! Cache key naming and TTL policy.
//!
//! Read and write paths must agree on these keys, so both go through
//! `CachePolicy`.

use crate::config::Config;

/// Default key prefix for student entries.
pub const DEFAULT_COLLECTION: &str = "students";

/// Default TTL in seconds for both key shapes.
pub const DEFAULT_TTL_SECONDS: u64 = 5;

/// Key names and TTL for one entity collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    collection: String,
    ttl_seconds: u64,
}

impl CachePolicy {
    pub fn new(collection: impl Into<String>, ttl_seconds: u64) -> Self {
        Self {
            collection: collection.into(),
            ttl_seconds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.collection.clone(), config.cache_ttl)
    }

    /// Key of the full listing: `<collection>:all`.
    pub fn collection_key(&self) -> String {
        format!("{}:all", self.collection)
    }

    /// Key of a single entity: `<collection>:<id>`.
    pub fn entity_key(&self, id: i64) -> String {
        format!("{}:{}", self.collection, id)
    }

    /// TTL applied to every write, in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_COLLECTION, DEFAULT_TTL_SECONDS)
    }
}
