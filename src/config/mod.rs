//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed constants (target directory, ad domains, rule markers)
//! - The immutable `Config` and `Patterns` types built from them

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Patterns};
