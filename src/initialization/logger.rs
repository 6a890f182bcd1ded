//! Logger setup for batch runs.
//!
//! Two line formats: a colored one for terminals and one JSON object per line for
//! log collectors.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Installs the global logger.
///
/// Directives from `RUST_LOG` are read first and `level` then replaces the global
/// filter. Parser crates are capped so a messy saved page does not drown the
/// removal log.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=ad_scrub::clean=debug ad_scrub
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    // html5ever reports every recoverable parse error; saved pages are full of them
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = json_line(
                chrono::Utc::now().timestamp_millis(),
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{}", line)
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            let line = plain_line(record.level(), record.target(), &record.args().to_string());
            writeln!(buf, "{}", line)
        }),
    };

    builder.try_init().map_err(InitializationError::from)?;
    Ok(())
}

fn level_emoji(level: Level) -> &'static str {
    match level {
        Level::Error => "❌",
        Level::Warn => "⚠️",
        Level::Info => "✔️",
        Level::Debug => "🔍",
        Level::Trace => "🔬",
    }
}

fn level_color(level: Level) -> ColoredString {
    let name = level.to_string();
    match level {
        Level::Error => name.red(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.purple(),
    }
}

fn plain_line(level: Level, target: &str, message: &str) -> String {
    format!(
        "{} {} [{}] {}",
        level_emoji(level),
        target.cyan(),
        level_color(level),
        message
    )
}

fn json_line(timestamp_millis: i64, level: Level, target: &str, message: &str) -> String {
    let entry = serde_json::json!({
        "ts": timestamp_millis,
        "level": level.as_str(),
        "target": target,
        "msg": message,
    });
    entry.to_string()
}
