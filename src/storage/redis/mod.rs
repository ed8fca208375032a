//! Redis cache backend
//!
//! This module provides Redis connectivity and the `CacheStore` implementation
//! over it.

mod cache;
mod pool;

pub use pool::RedisPool;
