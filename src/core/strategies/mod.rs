//! Caching strategy components
//!
//! Each strategy is an independent component over the injected `CacheStore`
//! and `EntityStore` capabilities. Callers pick the strategy per operation;
//! none of the components owns persistent state of its own.

pub mod cache_aside;
pub mod refresh_ahead;
pub mod write_behind;
pub mod write_through;


pub use cache_aside::CacheAsideReader;
pub use refresh_ahead::{RefreshAheadScheduler, RefreshOutcome};
pub use write_behind::{FlushOutcome, WriteBehindBuffer};
pub use write_through::WriteThroughWriter;
