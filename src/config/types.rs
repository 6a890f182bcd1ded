//! Configuration types.
//!
//! This module defines the immutable configuration the cleaner is built with. The
//! binary uses [`Config::default`], which is assembled from the constants in
//! [`crate::config::constants`]; tests and library callers construct it directly.

use std::path::PathBuf;

use crate::config::constants::{
    ADBLOCK_TOKEN, AD_CONFIG_MARKER, AD_CONTAINER_CLASSES, AD_DOMAINS, ANTI_ADBLOCK_MARKERS,
    ANTI_ADBLOCK_STYLE_MARKERS, DEFAULT_TARGET_DIR, HTML_EXTENSION, POPUP_MARKER,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    #[default]
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    #[default]
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Markers the removal rules match against.
///
/// Every field is compared with a plain substring test, except `container_classes`,
/// which is compared against the individual tokens of an element's `class` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patterns {
    /// Domain fragments checked against script `src` and inline text
    pub ad_domains: Vec<String>,
    /// Inline ad-configuration object marker
    pub ad_config_marker: String,
    /// Class tokens identifying ad containers
    pub container_classes: Vec<String>,
    /// Anti-adblock detection function names
    pub detection_markers: Vec<String>,
    /// Popup trigger (only matches together with `adblock_token`)
    pub popup_marker: String,
    /// Adblock token paired with `popup_marker`
    pub adblock_token: String,
    /// Anti-adblock CSS selector fragments
    pub style_markers: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            ad_domains: owned(AD_DOMAINS),
            ad_config_marker: AD_CONFIG_MARKER.to_string(),
            container_classes: owned(AD_CONTAINER_CLASSES),
            detection_markers: owned(ANTI_ADBLOCK_MARKERS),
            popup_marker: POPUP_MARKER.to_string(),
            adblock_token: ADBLOCK_TOKEN.to_string(),
            style_markers: owned(ANTI_ADBLOCK_STYLE_MARKERS),
        }
    }
}

/// Library configuration.
///
/// # Examples
///
/// ```
/// use ad_scrub::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     target_dir: PathBuf::from("./saved_pages"),
///     ..Default::default()
/// };
/// assert_eq!(config.extension, ".html");
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory whose HTML files are cleaned in place
    pub target_dir: PathBuf,
    /// File name suffix selecting which entries to clean
    pub extension: String,
    /// Markers used by the removal rules
    pub patterns: Patterns,
    /// Write indented output (`true`) or html5ever's compact serialization (`false`)
    pub pretty_print: bool,
    /// Log level
    pub log_level: LogLevel,
    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            extension: HTML_EXTENSION.to_string(),
            patterns: Patterns::default(),
            pretty_print: true,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
