//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (`CleanError`, `InitializationError`)
//! - Processing statistics tracking (per-file errors, per-rule removals)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{CleanError, ErrorType, InitializationError};
