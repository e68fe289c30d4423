//! Cache Module
//!
//! The `CacheBackend` contract, the key/TTL policy shared by the read and
//! write paths, and an in-memory backend with TTL expiration and LRU eviction.

mod backend;
mod entry;
mod keys;
mod lru;
mod memory;
mod stats;
mod store;


// Re-export public types
pub use backend::CacheBackend;
pub use entry::CacheEntry;
pub use keys::{CachePolicy, DEFAULT_COLLECTION, DEFAULT_TTL_SECONDS};
pub use lru::LruTracker;
pub use memory::MemoryCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
