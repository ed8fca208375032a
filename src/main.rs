//! Caching strategy coordinator demo
//!
//! Wires the four strategy components over the configured backends, runs the
//! cache vs. store latency comparison, and exercises each strategy once.

use cacheflow_rs::{
    monitoring, storage, Config, Coordinator, EntityStore, MemoryDatabase, MemoryStore,
    PolicyConfig, Result, User,
};
use clap::Parser;
use rand::Rng;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "coordinator", about = "Caching strategy coordinator demo", version)]
struct Args {
    /// Path to a YAML configuration file (environment variables otherwise)
    #[arg(long, env = "COORDINATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Iterations per benchmarked operation
    #[arg(long, default_value_t = 100)]
    iterations: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging system
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    info!("Benchmarking cache vs store...");
    run_latency_comparison(&config, args.iterations).await;

    // Normal strategy usage against the configured backends
    let cache = storage::cache_from_config(&config).await?;
    let db = Arc::new(MemoryDatabase::new());
    db.seed(User::new(1, "John Doe"));
    let coordinator = Coordinator::with_stores(cache, db, &config.policy);

    let user = coordinator.reader().get(1).await?;
    info!("Fetched: {:?}", user);

    coordinator.writer().update(1, "Updated Name").await?;
    coordinator
        .buffer()
        .buffer_write(&User::new(2, "Buffered User"))
        .await?;
    let flushed = coordinator.buffer().flush().await?;
    info!(?flushed, "flush outcome");

    let refreshed = coordinator.refresher().refresh(&[1, 2]).await;
    info!(?refreshed, "refresh outcome");

    Ok(())
}

/// Compare a cache-aside read path against direct store fetches
///
/// Runs against a dedicated in-memory rig with simulated store latency so the
/// numbers do not depend on an external backend being reachable.
async fn run_latency_comparison(config: &Config, iterations: u32) {
    let latency = config
        .storage
        .database
        .simulated_latency()
        .unwrap_or(Duration::from_millis(50));

    let db = Arc::new(MemoryDatabase::with_latency(latency));
    for id in 0..10 {
        db.seed(User::new(id, format!("User {}", id)));
    }
    let coordinator = Coordinator::with_stores(
        Arc::new(MemoryStore::new()),
        db.clone(),
        &PolicyConfig::default(),
    );

    let cached = monitoring::run_benchmark("Fetch via cache-aside", iterations, || {
        let id = rand::thread_rng().gen_range(0..10);
        let reader = coordinator.reader();
        async move {
            let _ = reader.get(id).await;
        }
    })
    .await;
    info!("{}", cached);

    let direct = monitoring::run_benchmark("Fetch from store only", iterations, || {
        let id = rand::thread_rng().gen_range(0..10);
        let db = db.clone();
        async move {
            let _ = db.load_by_id(id).await;
        }
    })
    .await;
    info!("{}", direct);
}
