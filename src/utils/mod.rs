//! Utility functions.
//!
//! This module provides CSS selector parsing used by the cleaner's static selectors.

mod selector;

pub use selector::parse_selector_unsafe;
