//! Shared utilities
//!
//! This module provides error handling used throughout the coordinator.

pub mod error;

pub use error::{CoordinatorError, Result};
