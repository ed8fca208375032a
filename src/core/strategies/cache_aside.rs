//! Cache-aside (read-through) strategy
//!
//! Reads check the cache first and fall through to the authoritative store on
//! a miss, populating the cache on the way back. The cache is best-effort: no
//! read ever fails because the cache backend is down, and a corrupt entry is
//! indistinguishable from an absent one.

use crate::config::PolicyConfig;
use crate::core::keys::KeyCodec;
use crate::core::models::User;
use crate::storage::{CacheStore, EntityStore};
use crate::utils::error::{CoordinatorError, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Read-through reader with lazy cache population
pub struct CacheAsideReader {
    cache: Arc<dyn CacheStore>,
    store: Arc<dyn EntityStore>,
    codec: KeyCodec,
    default_ttl: Duration,
}

impl CacheAsideReader {
    /// Create a new reader
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

    /// Get a user, reading through to the authoritative store on a miss
    ///
    /// Errors only when the authoritative store fails or the user does not
    /// exist; cache failures degrade to the store path.
    pub async fn get(&self, id: i64) -> Result<User> {
        let key = self.codec.live_key(id);

        match self.cache.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    debug!(%key, "cache hit");
                    return Ok(user);
                }
                Err(e) => warn!(%key, error = %e, "corrupt cache entry, treating as miss"),
            },
            Ok(None) => debug!(%key, "cache miss"),
            Err(e) => warn!(%key, error = %e, "cache read failed, falling back to store"),
        }

        let user = self
            .store
            .load_by_id(id)
            .await?
            .ok_or_else(|| CoordinatorError::NotFound(format!("user {}", id)))?;

        // Population is best-effort; the fetched value is returned regardless
        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.cache.set(&key, &raw, self.default_ttl).await {
                    warn!(%key, error = %e, "cache population failed");
                } else {
                    debug!(%key, "populated cache after miss");
                }
            }
            Err(e) => warn!(%key, error = %e, "failed to serialize user for caching"),
        }

        Ok(user)
    }
}
