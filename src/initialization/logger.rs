//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// `RUST_LOG` is read first; the `level` argument then overrides it for this
/// crate, so `--log-level` always wins for `mx_filter` targets.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-row failure details
/// mx_filter email-list.csv --log-level debug
///
/// # Machine-readable logs
/// mx_filter email-list.csv --log-format json 2> run.jsonl
///
/// # Resolver internals via RUST_LOG
/// RUST_LOG=hickory_resolver=debug mx_filter email-list.csv
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    // Truncated or malformed UDP responses are retried internally by hickory
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("mx_filter", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    level_emoji(level),
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn level_emoji(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "❌",
        log::Level::Warn => "⚠️",
        log::Level::Info => "✔️",
        log::Level::Debug => "🔍",
        log::Level::Trace => "🔬",
    }
}

/// Renders one JSON log line (without the trailing newline).
fn json_line(ts_millis: i64, level: log::Level, target: &str, message: &str) -> String {
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":{},\"msg\":{}}}",
        ts_millis,
        level,
        serde_json::to_string(target).unwrap_or_else(|_| "\"\"".into()),
        serde_json::to_string(message).unwrap_or_else(|_| "\"\"".into())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_is_valid_json() {
        let line = json_line(
            1_700_000_000_000,
            log::Level::Warn,
            "mx_filter::utils",
            "Error processing domain \"bad\": no domain found",
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["ts"], 1_700_000_000_000_i64);
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["target"], "mx_filter::utils");
        assert_eq!(
            parsed["msg"],
            "Error processing domain \"bad\": no domain found"
        );
    }

    #[test]
    fn test_every_level_has_emoji() {
        for level in [
            log::Level::Error,
            log::Level::Warn,
            log::Level::Info,
            log::Level::Debug,
            log::Level::Trace,
        ] {
            assert!(!level_emoji(level).is_empty());
        }
    }

    #[test]
    fn test_second_init_reports_error() {
        // env_logger can only be installed once per process; whichever call
        // comes second must fail instead of panicking
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(init_logger_with(LevelFilter::Info, LogFormat::Json).is_err());
    }
}
