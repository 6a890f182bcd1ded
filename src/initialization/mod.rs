//! Application initialization.
//!
//! The cleaner needs no shared resources beyond the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
