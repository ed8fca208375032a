//! Benchmark harness
//!
//! Drives a named async operation N times sequentially and reports wall-clock
//! total and per-iteration average. Test scaffolding for relative-performance
//! claims, not part of the caching contract.

use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::info;

/// Latency statistics for one benchmarked operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    /// Operation label
    pub name: String,
    /// Number of sequential runs
    pub iterations: u32,
    /// Total wall-clock time
    pub total: Duration,
    /// Per-iteration average
    pub average: Duration,
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: total={:?}, avg={:?} ({} iterations)",
            self.name, self.total, self.average, self.iterations
        )
    }
}

/// Run an operation `iterations` times and measure it
pub async fn run_benchmark<F, Fut>(name: &str, iterations: u32, mut op: F) -> BenchmarkReport
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let start = Instant::now();
    for _ in 0..iterations {
        op().await;
    }
    let total = start.elapsed();
    let average = if iterations == 0 {
        Duration::ZERO
    } else {
        total / iterations
    };

    let report = BenchmarkReport {
        name: name.to_string(),
        iterations,
        total,
        average,
    };
    info!(name, ?total, ?average, "benchmark completed");
    report
}
