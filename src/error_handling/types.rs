//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors that stop a single file from being cleaned.
///
/// Both kinds are file-scoped: the batch logs them and moves on to the next file.
#[derive(Error, Debug)]
pub enum CleanError {
    /// The file could not be opened or is not valid UTF-8.
    #[error("Error reading {}: {source}", path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error (`InvalidData` for decoding failures)
        #[source]
        source: std::io::Error,
    },

    /// The cleaned document could not be written back.
    #[error("Error writing {}: {source}", path.display())]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl CleanError {
    /// Category of this error for statistics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            CleanError::Read { .. } => ErrorType::FileReadError,
            CleanError::Write { .. } => ErrorType::FileWriteError,
        }
    }
}

/// Types of per-file errors counted during a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// File could not be opened or decoded
    FileReadError,
    /// Cleaned content could not be written back
    FileWriteError,
}

impl ErrorType {
    /// Returns a human-readable label for this error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::FileReadError => "File read error",
            ErrorType::FileWriteError => "File write error",
        }
    }
}
