//! Shared test fixtures

use cacheflow_rs::{Coordinator, MemoryDatabase, MemoryStore, PolicyConfig, User};
use std::sync::Arc;

/// A coordinator over in-memory backends, with handles to both stores
pub struct TestRig {
    pub coordinator: Coordinator,
    pub cache: Arc<MemoryStore>,
    pub db: Arc<MemoryDatabase>,
}

/// Build a coordinator over fresh in-memory backends with default policy
pub fn memory_rig() -> TestRig {
    memory_rig_with_policy(PolicyConfig::default())
}

/// Build a coordinator over fresh in-memory backends with a custom policy
pub fn memory_rig_with_policy(policy: PolicyConfig) -> TestRig {
    let cache = Arc::new(MemoryStore::new());
    let db = Arc::new(MemoryDatabase::new());
    let coordinator = Coordinator::with_stores(cache.clone(), db.clone(), &policy);
    TestRig {
        coordinator,
        cache,
        db,
    }
}

/// Seed the authoritative store with a few users
pub fn seed_users(rig: &TestRig) {
    rig.db.seed(User::new(1, "John Doe"));
    rig.db.seed(User::new(2, "Jane Roe"));
    rig.db.seed(User::new(3, "Sam Poe"));
}
