//! Logger configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Configuration shared by every logger built from it.
///
/// The configuration is immutable after construction; loggers hold it behind
/// an `Arc` so a single `start_time` can be shared across many loggers (see
/// [`FileLoggerFactory`](crate::factory::FileLoggerFactory)).
///
/// # Examples
///
/// ```
/// use easylog::core::LoggerConfig;
///
/// let config = LoggerConfig::new()
///     .with_use_delta_time(true)
///     .with_log_caller(true);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// The time at the start of logging.
    ///
    /// Fixed at config-creation time. Used as the reference point for delta
    /// timestamps and for derived log file names.
    pub start_time: DateTime<Utc>,

    /// Render timestamps as Unix-epoch milliseconds instead of the
    /// `DD-MM-YYYYTHH:mm:ss.fff` date format.
    pub use_unix_time: bool,

    /// Log the elapsed time since `start_time` instead of the current time,
    /// such that logging 12 seconds and 54 milliseconds after start logs
    /// `00:00:12.054`. Days are not logged; logging 4 days after start logs
    /// the total hours, `96:00:00.000`.
    pub use_delta_time: bool,

    /// Also log the call site, e.g. `main.rs:36`.
    pub log_caller: bool,

    /// Also log the current time (or delta) when logging.
    pub log_timestamp: bool,

    /// Also log the level of the log.
    pub log_level: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            start_time: Utc::now(),
            use_unix_time: false,
            use_delta_time: false,
            log_caller: false,
            log_timestamp: true,
            log_level: true,
        }
    }
}

impl LoggerConfig {
    /// Create a configuration with default values, `start_time` pinned to now
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start time
    #[must_use]
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Set whether timestamps render as Unix-epoch milliseconds
    #[must_use]
    pub fn with_use_unix_time(mut self, use_unix_time: bool) -> Self {
        self.use_unix_time = use_unix_time;
        self
    }

    /// Set whether timestamps are deltas from `start_time`
    #[must_use]
    pub fn with_use_delta_time(mut self, use_delta_time: bool) -> Self {
        self.use_delta_time = use_delta_time;
        self
    }

    /// Set whether the call site is logged
    #[must_use]
    pub fn with_log_caller(mut self, log_caller: bool) -> Self {
        self.log_caller = log_caller;
        self
    }

    /// Set whether a timestamp section is logged
    #[must_use]
    pub fn with_log_timestamp(mut self, log_timestamp: bool) -> Self {
        self.log_timestamp = log_timestamp;
        self
    }

    /// Set whether the level section is logged
    #[must_use]
    pub fn with_log_level(mut self, log_level: bool) -> Self {
        self.log_level = log_level;
        self
    }

    /// Wrap this config in an Arc for sharing across loggers
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert!(!config.use_unix_time);
        assert!(!config.use_delta_time);
        assert!(!config.log_caller);
        assert!(config.log_timestamp);
        assert!(config.log_level);
    }

    #[test]
    fn test_builder_pattern() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let config = LoggerConfig::new()
            .with_start_time(start)
            .with_use_unix_time(true)
            .with_use_delta_time(true)
            .with_log_caller(true)
            .with_log_timestamp(false)
            .with_log_level(false);

        assert_eq!(config.start_time, start);
        assert!(config.use_unix_time);
        assert!(config.use_delta_time);
        assert!(config.log_caller);
        assert!(!config.log_timestamp);
        assert!(!config.log_level);
    }

    #[test]
    fn test_shared_config() {
        let config = LoggerConfig::new().with_log_caller(true).shared();
        let config2 = Arc::clone(&config);
        assert_eq!(config.start_time, config2.start_time);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = LoggerConfig::new()
            .with_start_time(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap())
            .with_use_unix_time(true);

        let json = serde_json::to_string(&config).expect("serialize");
        let back: LoggerConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.start_time, config.start_time);
        assert!(back.use_unix_time);
        assert!(back.log_level);
    }
}
