//! Log line assembly
//!
//! Builds the ordered section list (level, timestamp, caller, message) per
//! configuration. The builder adds no line terminator; writers do.

use super::config::LoggerConfig;
use super::log_level::LogLevel;
use super::timestamp::{format_delta, format_timestamp};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Separator between log line sections
pub const SECTION_SEPARATOR: &str = " | ";

/// Build a single log line.
///
/// Sections appear in the order level, timestamp, caller, message; each of the
/// first three is included only when the corresponding config flag is set, and
/// the message is always included verbatim. `now` is the point in time the
/// entry is logged at; callers pass the current wall clock.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use easylog::core::{build_line, LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::new().with_log_timestamp(false);
/// let line = build_line(&config, LogLevel::Info, "ready", "main.rs", 7, Utc::now());
/// assert_eq!(line, "[INFO] | ready");
/// ```
#[must_use]
pub fn build_line(
    config: &LoggerConfig,
    level: LogLevel,
    message: &str,
    caller_file: &str,
    caller_line: u32,
    now: DateTime<Utc>,
) -> String {
    let mut sections: Vec<String> = Vec::with_capacity(4);

    if config.log_level {
        sections.push(format!("[{}]", level.to_str()));
    }

    if config.log_timestamp {
        let timestamp = if config.use_delta_time {
            format_delta(&now, &config.start_time, config.use_unix_time)
        } else {
            format_timestamp(&now, config.use_unix_time)
        };
        sections.push(timestamp);
    }

    if config.log_caller {
        sections.push(format!("{}:{}", base_name(caller_file), caller_line));
    }

    sections.push(message.to_string());

    sections.join(SECTION_SEPARATOR)
}

/// Base name of a caller path, falling back to the path itself
fn base_name(caller_file: &str) -> String {
    Path::new(caller_file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| caller_file.to_string())
}
