//! Batch run over the target directory.
//!
//! Enumerates the directory once, cleans every entry whose name ends with the
//! configured extension, and keeps going past per-file failures.

mod finalize;
mod task;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, error, info};

use crate::config::Config;
use crate::error_handling::ProcessingStats;

pub use finalize::print_processing_statistics;
pub use task::clean_file;

/// Results of a batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Directory that was scanned
    pub target_dir: PathBuf,
    /// Number of matching files attempted
    pub total_files: usize,
    /// Number of files cleaned and written back
    pub cleaned: usize,
    /// Number of files that failed to read or write
    pub failed: usize,
    /// Per-rule removal and per-type error counts
    pub stats: ProcessingStats,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Cleans every matching file in `config.target_dir`.
///
/// Files are processed one at a time in directory listing order. A file that cannot
/// be read or written is logged and counted; the run always continues with the next
/// file and always ends with a completion line.
///
/// # Errors
///
/// Returns an error only if the target directory itself cannot be listed.
pub fn run_batch(config: &Config) -> Result<BatchReport> {
    let start_time = Instant::now();
    info!("Scanning directory: {}", config.target_dir.display());

    let candidates = list_candidates(&config.target_dir, &config.extension)?;

    let mut stats = ProcessingStats::new();
    let mut cleaned = 0;
    let mut failed = 0;

    for (file_name, path) in &candidates {
        info!("Processing {}...", file_name);
        match clean_file(path, config) {
            Ok(outcome) => {
                for removal in &outcome.removals {
                    stats.increment_removal(removal.rule);
                }
                cleaned += 1;
                info!(
                    "Successfully cleaned: {} ({} removed)",
                    file_name,
                    outcome.removals.len()
                );
            }
            Err(e) => {
                stats.increment_error(e.error_type());
                failed += 1;
                error!("{}", e);
            }
        }
    }

    info!("Done.");

    Ok(BatchReport {
        target_dir: config.target_dir.clone(),
        total_files: candidates.len(),
        cleaned,
        failed,
        stats,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}

/// Entries of `dir` whose file name ends with `extension`, in listing order.
///
/// Entries that cannot be inspected are skipped with a warning; whether a match is
/// actually a readable file is left to the cleaner.
fn list_candidates(dir: &Path, extension: &str) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.ends_with(extension) {
            candidates.push((file_name, entry.path()));
        } else {
            debug!("Skipping {}", file_name);
        }
    }
    Ok(candidates)
}
