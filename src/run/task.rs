//! Per-file cleaning.
//!
//! Reads one file, cleans it and writes the result back over the same path.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::clean::{clean_html, CleanOutcome};
use crate::config::Config;
use crate::error_handling::CleanError;

/// Cleans a single HTML file in place.
///
/// The cleaned document is written to a temporary file next to the original and then
/// renamed over it, so a failed write leaves the original content untouched. The
/// original file's permissions are carried over.
///
/// # Errors
///
/// * `CleanError::Read` if the file cannot be opened or is not valid UTF-8
/// * `CleanError::Write` if the cleaned content cannot be written back
pub fn clean_file(path: &Path, config: &Config) -> Result<CleanOutcome, CleanError> {
    let read_error = |source| CleanError::Read {
        path: path.to_path_buf(),
        source,
    };
    let content = fs::read_to_string(path).map_err(read_error)?;
    let permissions = fs::metadata(path).map_err(read_error)?.permissions();

    let outcome = clean_html(&content, &config.patterns, config.pretty_print);

    write_atomically(path, outcome.html.as_bytes(), permissions).map_err(|source| {
        CleanError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(outcome)
}

fn write_atomically(path: &Path, bytes: &[u8], permissions: fs::Permissions) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), permissions)?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
