//! Storage layer
//!
//! This module defines the two external capabilities the coordinator depends
//! on (the cache backend and the authoritative store) and their
//! implementations. Both are injected as `Arc<dyn ...>` at component
//! construction so tests can substitute doubles.

pub mod database;
pub mod memory;
#[cfg(feature = "redis")]
pub mod redis;

pub use database::MemoryDatabase;
pub use memory::MemoryStore;
#[cfg(feature = "redis")]
pub use redis::RedisPool;

use crate::config::Config;
use crate::core::models::User;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Select and connect the cache backend named by the configuration
///
/// Redis when the `redis` feature is on and `storage.redis.enabled` is true;
/// the in-memory backend otherwise.
#[cfg(feature = "redis")]
pub async fn cache_from_config(config: &Config) -> Result<Arc<dyn CacheStore>> {
    if config.storage.redis.enabled {
        let pool = RedisPool::new(&config.storage.redis).await?;
        pool.health_check().await?;
        Ok(Arc::new(pool))
    } else {
        debug!("Redis disabled, using in-memory cache backend");
        Ok(Arc::new(MemoryStore::new()))
    }
}

/// Select the cache backend named by the configuration
#[cfg(not(feature = "redis"))]
pub async fn cache_from_config(_config: &Config) -> Result<Arc<dyn CacheStore>> {
    debug!("Built without the redis feature, using in-memory cache backend");
    Ok(Arc::new(MemoryStore::new()))
}

/// Abstract cache backend
///
/// Individual operations are atomic per the backend's own contract; no
/// cross-key transactions are assumed. `list_keys` is a non-atomic snapshot
/// enumeration. Implementations must be safe for concurrent use.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get the value stored under a key, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key with an expiry
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Delete a key
    async fn delete(&self, key: &str) -> Result<()>;

    /// Enumerate keys matching a glob-style pattern (snapshot, non-atomic)
    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Remaining TTL for a key; `None` if the key is absent or has no expiry
    async fn ttl(&self, key: &str) -> Result<Option<Duration>>;
}

/// Abstract authoritative store
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Load an entity by id
    async fn load_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Persist an entity (idempotent upsert; safe to call more than once)
    async fn persist(&self, user: &User) -> Result<()>;
}
