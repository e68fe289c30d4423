//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the memory cache can hold
    pub max_entries: usize,
    /// TTL in seconds applied to every cache write
    pub cache_ttl: u64,
    /// Prefix used for cache keys (`<collection>:all`, `<collection>:<id>`)
    pub collection: String,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `CACHE_TTL` - Cache entry TTL in seconds (default: 5)
    /// - `CACHE_COLLECTION` - Cache key prefix (default: "students")
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            collection: env::var("CACHE_COLLECTION")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.collection),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            cache_ttl: 5,
            collection: "students".to_string(),
            server_port: 8080,
            cleanup_interval: 1,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
