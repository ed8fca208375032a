//! In-memory authoritative store
//!
//! Stand-in for the real persistent store behind the `EntityStore` capability.
//! An optional simulated per-operation latency makes the cached vs. uncached
//! benchmark comparison meaningful.

use super::EntityStore;
use crate::core::models::User;
use crate::utils::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use tracing::debug;

/// In-memory `EntityStore` with optional simulated latency
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    users: DashMap<i64, User>,
    latency: Option<Duration>,
}

impl MemoryDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a database that sleeps for `latency` on every operation
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            users: DashMap::new(),
            latency: Some(latency),
        }
    }

    /// Insert a record directly, bypassing latency simulation
    pub fn seed(&self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the database holds no records
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl EntityStore for MemoryDatabase {
    async fn load_by_id(&self, id: i64) -> Result<Option<User>> {
        self.simulate_latency().await;
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn persist(&self, user: &User) -> Result<()> {
        self.simulate_latency().await;
        debug!(id = user.id, "persisting user to authoritative store");
        // Upsert keyed by id; repeated persists of the same entity are safe
        self.users.insert(user.id, user.clone());
        Ok(())
    }
}
