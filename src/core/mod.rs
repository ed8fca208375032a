//! Core caching coordinator functionality
//!
//! This module contains the entity model, the cache key codec, and the four
//! caching strategy components.

pub mod keys;
pub mod models;
pub mod strategies;

pub use keys::KeyCodec;
pub use models::User;
pub use strategies::{
    CacheAsideReader, FlushOutcome, RefreshAheadScheduler, RefreshOutcome, WriteBehindBuffer,
    WriteThroughWriter,
};
