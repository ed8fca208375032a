//! Monitoring utilities
//!
//! This module provides the benchmark harness used to compare cached and
//! uncached access paths.

pub mod benchmark;

pub use benchmark::{run_benchmark, BenchmarkReport};
