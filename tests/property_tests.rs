//! Property-based tests for easylog using proptest

use chrono::{TimeZone, Utc};
use easylog::core::{
    build_line, derive_file_name, format_delta, format_timestamp, LogLevel, LoggerConfig,
    SECTION_SEPARATOR,
};
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Verbose),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// LogLevel Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Parsing accepts case-insensitive input
    #[test]
    fn test_log_level_case_insensitive(use_lower in any::<bool>()) {
        let levels = ["TRACE", "DEBUG", "VERBOSE", "INFO", "WARN", "ERROR", "FATAL"];

        for level_str in levels {
            let input = if use_lower {
                level_str.to_lowercase()
            } else {
                level_str.to_string()
            };

            let parsed: std::result::Result<LogLevel, String> = input.parse();
            prop_assert!(parsed.is_ok(), "Failed to parse: {}", input);
        }
    }
}

// ============================================================================
// Timestamp Formatting Tests
// ============================================================================

proptest! {
    /// Unix rendering is exactly the signed millisecond count
    #[test]
    fn test_unix_timestamp_is_millis(millis in -62_135_596_800_000i64..=253_402_300_799_999i64) {
        let t = Utc.timestamp_millis_opt(millis).single().expect("valid timestamp");
        prop_assert_eq!(format_timestamp(&t, true), millis.to_string());
    }

    /// Date rendering always has the fixed shape DD-MM-YYYYTHH:mm:ss.fff
    #[test]
    fn test_date_timestamp_shape(millis in 0i64..=253_402_300_799_999i64) {
        let t = Utc.timestamp_millis_opt(millis).single().expect("valid timestamp");
        let rendered = format_timestamp(&t, false);

        // DD-MM-YYYYTHH:mm:ss.fff for 4-digit years
        prop_assert_eq!(rendered.len(), 23, "unexpected width: {}", rendered);
        prop_assert_eq!(&rendered[2..3], "-");
        prop_assert_eq!(&rendered[5..6], "-");
        prop_assert_eq!(&rendered[10..11], "T");
        prop_assert_eq!(&rendered[13..14], ":");
        prop_assert_eq!(&rendered[16..17], ":");
        prop_assert_eq!(&rendered[19..20], ".");
    }

    /// A delta always decomposes back to its millisecond count
    #[test]
    fn test_delta_roundtrips_to_millis(start_ms in 0i64..=4_102_444_800_000i64, delta_ms in 0i64..=500_000_000_000i64) {
        let start = Utc.timestamp_millis_opt(start_ms).single().expect("valid start");
        let t = Utc.timestamp_millis_opt(start_ms + delta_ms).single().expect("valid time");

        let rendered = format_delta(&t, &start, false);
        let (hours, rest) = rendered.split_once(':').expect("hours section");
        let (minutes, rest) = rest.split_once(':').expect("minutes section");
        let (seconds, millis) = rest.split_once('.').expect("seconds section");

        let recomposed = hours.parse::<i64>().unwrap() * 3_600_000
            + minutes.parse::<i64>().unwrap() * 60_000
            + seconds.parse::<i64>().unwrap() * 1_000
            + millis.parse::<i64>().unwrap();
        prop_assert_eq!(recomposed, delta_ms);
    }

    /// Unix-mode deltas are the signed millisecond difference
    #[test]
    fn test_unix_delta_signed(start_ms in -1_000_000_000i64..=1_000_000_000i64, t_ms in -1_000_000_000i64..=1_000_000_000i64) {
        let start = Utc.timestamp_millis_opt(start_ms).single().expect("valid start");
        let t = Utc.timestamp_millis_opt(t_ms).single().expect("valid time");
        prop_assert_eq!(format_delta(&t, &start, true), (t_ms - start_ms).to_string());
    }

    /// Negative deltas never panic and carry exactly one leading sign
    #[test]
    fn test_negative_delta_sign(backwards_ms in 1i64..=500_000_000_000i64) {
        let start = Utc.timestamp_millis_opt(backwards_ms).single().expect("valid start");
        let t = Utc.timestamp_millis_opt(0).single().expect("valid time");

        let rendered = format_delta(&t, &start, false);
        prop_assert!(rendered.starts_with('-'));
        prop_assert!(!rendered[1..].contains('-'), "interior sign in {}", rendered);
    }
}

// ============================================================================
// Line Builder Tests
// ============================================================================

proptest! {
    /// The message is always the final section, verbatim
    #[test]
    fn test_line_ends_with_message(message in ".*", level in any_level()) {
        let config = LoggerConfig::new();
        let line = build_line(&config, level, &message, "file.rs", 1, Utc::now());
        prop_assert!(line.ends_with(&message));
    }

    /// With everything disabled the line is exactly the message
    #[test]
    fn test_bare_line_is_message(message in ".*") {
        let config = LoggerConfig::new()
            .with_log_timestamp(false)
            .with_log_level(false);
        let line = build_line(&config, LogLevel::Info, &message, "file.rs", 1, Utc::now());
        prop_assert_eq!(line, message);
    }

    /// Section count follows the enabled flags (separator-free message)
    #[test]
    fn test_section_count(
        log_level in any::<bool>(),
        log_timestamp in any::<bool>(),
        log_caller in any::<bool>(),
        message in "[a-zA-Z0-9 ]*",
    ) {
        let config = LoggerConfig::new()
            .with_log_level(log_level)
            .with_log_timestamp(log_timestamp)
            .with_log_caller(log_caller);

        let line = build_line(&config, LogLevel::Info, &message, "file.rs", 1, Utc::now());

        let expected =
            1 + usize::from(log_level) + usize::from(log_timestamp) + usize::from(log_caller);
        prop_assert_eq!(line.split(SECTION_SEPARATOR).count(), expected);
    }
}

// ============================================================================
// Naming Policy Tests
// ============================================================================

proptest! {
    /// Ids pass through into the derived name byte-for-byte
    #[test]
    fn test_id_verbatim_in_name(id in "\\PC+") {
        let start = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
        let name = derive_file_name(&start, false, Some(&id));
        prop_assert_eq!(name, format!("01-01-0001T00:00:00.000_{}.log", id));
    }

    /// Derived names always end in .log and start with the timestamp base
    #[test]
    fn test_name_shape(millis in 0i64..=4_102_444_800_000i64, with_id in any::<bool>()) {
        let start = Utc.timestamp_millis_opt(millis).single().expect("valid start");
        let id = with_id.then_some("run");

        let name = derive_file_name(&start, false, id);
        prop_assert!(name.ends_with(".log"));
        prop_assert!(name.starts_with(&format_timestamp(&start, false)));
    }
}
