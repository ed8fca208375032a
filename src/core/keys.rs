//! Cache key construction
//!
//! All key formatting is centralized here so the live and buffer namespaces
//! cannot collide through ad hoc formatting elsewhere.

/// Deterministic mapping from (entity kind, id) to cache key strings
#[derive(Debug, Clone)]
pub struct KeyCodec {
    kind: String,
}

impl KeyCodec {
    /// Create a codec for an entity kind, e.g. `"user"`
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Key for a live cache entry: `user:{id}`
    pub fn live_key(&self, id: i64) -> String {
        format!("{}:{}", self.kind, id)
    }

    /// Key for a buffered (write-behind) entry: `buffer:user:{id}`
    pub fn buffer_key(&self, id: i64) -> String {
        format!("buffer:{}:{}", self.kind, id)
    }

    /// Pattern matching every buffered entry of this kind: `buffer:user:*`
    pub fn buffer_pattern(&self) -> String {
        format!("buffer:{}:*", self.kind)
    }
}

impl Default for KeyCodec {
    fn default() -> Self {
        Self::new("user")
    }
}
