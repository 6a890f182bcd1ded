//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ad_scrub` library that handles:
//! - Logger initialization
//! - User-facing output formatting
//!
//! The target directory and ad patterns are fixed; see `ad_scrub::config`.

use anyhow::{Context, Result};
use std::process;

use ad_scrub::initialization::init_logger_with;
use ad_scrub::{print_processing_statistics, run_batch, Config};

fn main() -> Result<()> {
    let config = Config::default();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_batch(&config) {
        Ok(report) => {
            print_processing_statistics(&report.stats);
            println!(
                "✅ Processed {} file{} ({} cleaned, {} failed) in {:.1}s - {}",
                report.total_files,
                if report.total_files == 1 { "" } else { "s" },
                report.cleaned,
                report.failed,
                report.elapsed_seconds,
                report.target_dir.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("ad_scrub error: {:#}", e);
            process::exit(1);
        }
    }
}
