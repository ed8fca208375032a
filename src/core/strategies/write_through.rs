//! Write-through strategy
//!
//! A write goes to the authoritative store and then to the cache as one
//! logical operation. There is no atomicity between the two physical writes:
//! a failure after the store write leaves the cache stale or absent, which is
//! acceptable since the cache-aside path repopulates on the next miss. The
//! store write failing is the only visible failure; the cache step is
//! best-effort.

use crate::config::PolicyConfig;
use crate::core::keys::KeyCodec;
use crate::core::models::User;
use crate::storage::{CacheStore, EntityStore};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Synchronous dual writer
pub struct WriteThroughWriter {
    cache: Arc<dyn CacheStore>,
    store: Arc<dyn EntityStore>,
    codec: KeyCodec,
    default_ttl: Duration,
}

impl WriteThroughWriter {
    /// Create a new writer
    pub fn new(
        cache: Arc<dyn CacheStore>,
        store: Arc<dyn EntityStore>,
        codec: KeyCodec,
        policy: &PolicyConfig,
    ) -> Self {
        Self {
            cache,
            store,
            codec,
            default_ttl: policy.default_ttl(),
        }
    }

    /// Update a user's name through both stores
    pub async fn update(&self, id: i64, name: impl Into<String>) -> Result<User> {
        self.write(User::new(id, name)).await
    }

    /// Write a full user record through both stores
    pub async fn write(&self, user: User) -> Result<User> {
        self.store.persist(&user).await?;

        let key = self.codec.live_key(user.id);
        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.cache.set(&key, &raw, self.default_ttl).await {
                    warn!(%key, error = %e, "cache write failed after store write; entry repopulates on next miss");
                } else {
                    debug!(%key, "wrote through to cache");
                }
            }
            Err(e) => warn!(%key, error = %e, "failed to serialize user for caching"),
        }

        Ok(user)
    }
}
