//! ad_scrub library: in-place removal of ad and anti-adblock artifacts from saved HTML
//!
//! This library parses each HTML file in a directory, removes ad scripts, inline ad
//! configuration objects, ad containers, anti-adblock scripts and anti-adblock styles,
//! and writes the cleaned document back to the same path.
//!
//! # Example
//!
//! ```no_run
//! use ad_scrub::{run_batch, Config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     target_dir: std::path::PathBuf::from("./saved_pages"),
//!     ..Default::default()
//! };
//!
//! let report = run_batch(&config)?;
//! println!("Cleaned {} of {} files", report.cleaned, report.total_files);
//! # Ok(())
//! # }
//! ```
//!
//! Single documents can be cleaned without touching the filesystem:
//!
//! ```
//! use ad_scrub::{clean_html, Patterns};
//!
//! let outcome = clean_html(
//!     r#"<script src="https://x.al5sm.com/tag.js"></script><p>Live</p>"#,
//!     &Patterns::default(),
//!     true,
//! );
//! assert_eq!(outcome.removals.len(), 1);
//! assert!(!outcome.html.contains("al5sm.com"));
//! ```

#![warn(missing_docs)]

pub mod clean;
pub mod config;
pub mod error_handling;
pub mod initialization;
mod run;
mod utils;

// Re-export public API
pub use clean::{clean_document, clean_html, CleanOutcome, Removal, RemovalRule};
pub use config::{Config, LogFormat, LogLevel, Patterns};
pub use error_handling::{CleanError, ProcessingStats};
pub use run::{clean_file, print_processing_statistics, run_batch, BatchReport};
