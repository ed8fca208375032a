//! Test suite for cacheflow-rs
//!
//! Organized into:
//!
//! - `common/`: shared fixtures building coordinators over in-memory backends
//! - `integration/`: tests exercising the strategy components together
//!
//! Run with `cargo test`. Nothing here needs an external Redis; the in-memory
//! `CacheStore` implementation stands in for it.

pub mod common;
pub mod integration;
