//! Refresh-ahead strategy
//!
//! Proactively renews cache entries for caller-supplied hot ids whose
//! remaining TTL has dropped below a low-water mark. This only extends
//! existing entries; an absent key is never populated here, that is the
//! cache-aside path's job. Everything in this component is an optimization:
//! every failure is logged and skipped, and correctness never depends on a
//! refresh cycle running at all.

use crate::config::{PolicyConfig, RefreshSource};
use crate::core::keys::KeyCodec;
use crate::core::models::User;
use crate::storage::{CacheStore, EntityStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const PLACEHOLDER_NAME: &str = "Hot User";

/// Outcome of a single refresh cycle
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Entries rewritten with a full TTL
    pub refreshed: usize,
    /// Entries whose remaining TTL was above the threshold
    pub untouched: usize,
    /// Ids without a live entry, or skipped due to a failure
    pub skipped: usize,
}

/// TTL renewer for hot keys
pub struct RefreshAheadScheduler {
    cache: Arc<dyn CacheStore>,
    store: Arc<dyn EntityStore>,
    codec: KeyCodec,
    default_ttl: Duration,
    threshold: Duration,
    source: RefreshSource,
}

impl RefreshAheadScheduler {
    /// Create a new scheduler
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
            threshold: policy.refresh_threshold(),
            source: policy.refresh_source,
        }
    }

    /// Renew soon-to-expire entries among the given hot ids
    ///
    /// The hot id set is owned by the caller and passed per cycle. An external
    /// scheduler decides when cycles run.
    pub async fn refresh(&self, hot_ids: &[i64]) -> RefreshOutcome {
        let mut outcome = RefreshOutcome::default();

        for &id in hot_ids {
            let key = self.codec.live_key(id);

            let remaining = match self.cache.ttl(&key).await {
                Ok(Some(remaining)) => remaining,
                Ok(None) => {
                    debug!(%key, "no live entry, not populating");
                    outcome.skipped += 1;
                    continue;
                }
                Err(e) => {
                    warn!(%key, error = %e, "TTL query failed, skipping");
                    outcome.skipped += 1;
                    continue;
                }
            };

            if remaining >= self.threshold {
                outcome.untouched += 1;
                continue;
            }

            let Some(user) = self.recompute(id).await else {
                outcome.skipped += 1;
                continue;
            };

            match serde_json::to_string(&user) {
                Ok(raw) => match self.cache.set(&key, &raw, self.default_ttl).await {
                    Ok(()) => {
                        debug!(%key, ?remaining, "renewed entry ahead of expiry");
                        outcome.refreshed += 1;
                    }
                    Err(e) => {
                        warn!(%key, error = %e, "refresh write failed");
                        outcome.skipped += 1;
                    }
                },
                Err(e) => {
                    warn!(%key, error = %e, "failed to serialize user for refresh");
                    outcome.skipped += 1;
                }
            }
        }

        outcome
    }

    async fn recompute(&self, id: i64) -> Option<User> {
        match self.source {
            RefreshSource::Authoritative => match self.store.load_by_id(id).await {
                Ok(Some(user)) => Some(user),
                Ok(None) => {
                    debug!(id, "entity gone from store, letting entry lapse");
                    None
                }
                Err(e) => {
                    warn!(id, error = %e, "store reload failed, skipping refresh");
                    None
                }
            },
            RefreshSource::Placeholder => Some(User::new(id, PLACEHOLDER_NAME)),
        }
    }
}
