//! Student Service - student records behind a cache-aside TTL cache
//!
//! Reads are served from the cache when possible and repopulate it on a
//! miss; writes go to the store and invalidate the affected cache keys.

pub mod api;
pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::{Fetched, Origin, StudentService};
pub use tasks::spawn_cleanup_task;
