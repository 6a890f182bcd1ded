//! Batch statistics reporting.

use log::info;
use strum::IntoEnumIterator;

use crate::clean::RemovalRule;
use crate::error_handling::{ErrorType, ProcessingStats};

/// Prints removal and error counts to the log.
///
/// Categories with a zero count are left out.
pub fn print_processing_statistics(stats: &ProcessingStats) {
    let total_removals = stats.total_removals();
    let total_errors = stats.total_errors();

    if total_removals > 0 {
        info!("Removal Counts ({} total):", total_removals);
        for rule in RemovalRule::iter() {
            let count = stats.get_removal_count(rule);
            if count > 0 {
                info!("   {}: {}", rule.as_str(), count);
            }
        }
    }

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }
}
