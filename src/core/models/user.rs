//! User entity
//!
//! The cached domain object. Values are immutable once constructed for a given
//! read; a write replaces the whole value.

use serde::{Deserialize, Serialize};

/// A user record as stored in the authoritative store and cached as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Arbitrary additional attributes, round-tripped losslessly
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Create a user with no extra attributes
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: serde_json::Map::new(),
        }
    }
}
