//! Processing statistics tracking.
//!
//! This module tracks per-file errors and per-rule removals over a batch run.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ErrorType;
use crate::clean::RemovalRule;

/// Processing statistics tracker.
///
/// Counts errors by [`ErrorType`] and removals by [`RemovalRule`]. All types are
/// initialized to zero on creation so every category shows up in the final report.
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    errors: HashMap<ErrorType, usize>,
    removals: HashMap<RemovalRule, usize>,
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let errors = ErrorType::iter().map(|e| (e, 0)).collect();
        let removals = RemovalRule::iter().map(|r| (r, 0)).collect();
        ProcessingStats { errors, removals }
    }

    /// Increment an error counter.
    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Increment a removal counter.
    pub fn increment_removal(&mut self, rule: RemovalRule) {
        *self.removals.entry(rule).or_insert(0) += 1;
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    /// Get the number of nodes removed by a rule.
    pub fn get_removal_count(&self, rule: RemovalRule) -> usize {
        self.removals.get(&rule).copied().unwrap_or(0)
    }

    /// Total errors across all types.
    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }

    /// Total removals across all rules.
    pub fn total_removals(&self) -> usize {
        self.removals.values().sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
