//! Timestamp formatting utilities
//!
//! Renders a point in time either as a fixed-width `DD-MM-YYYYTHH:mm:ss.fff`
//! string or as Unix-epoch milliseconds, and renders elapsed time relative to
//! a start time with uncapped total hours.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Format a point in time.
///
/// With `use_unix_time` the result is the signed number of milliseconds since
/// the Unix epoch, full precision. Otherwise the result is
/// `DD-MM-YYYYTHH:mm:ss.fff` with the year zero-padded to 4 digits and keeping
/// its natural width beyond that.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use easylog::core::timestamp::format_timestamp;
///
/// let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(format_timestamp(&epoch, false), "01-01-1970T00:00:00.000");
/// assert_eq!(format_timestamp(&epoch, true), "0");
/// ```
#[must_use]
pub fn format_timestamp(t: &DateTime<Utc>, use_unix_time: bool) -> String {
    if use_unix_time {
        return t.timestamp_millis().to_string();
    }

    // Composed from date components instead of strftime: chrono's %Y prefixes
    // years above 9999 with an explicit sign.
    format!(
        "{:02}-{:02}-{:04}T{:02}:{:02}:{:02}.{:03}",
        t.day(),
        t.month(),
        t.year(),
        t.hour(),
        t.minute(),
        t.second(),
        t.timestamp_subsec_millis()
    )
}

/// Format the elapsed time between `start` and `t`.
///
/// With `use_unix_time` the result is the signed whole-millisecond delta.
/// Otherwise the result is `HH:mm:ss.fff` where `HH` is the total number of
/// elapsed hours, not capped at 24 and zero-padded to at least 2 digits.
///
/// A delta where `t` precedes `start` renders a single leading `-` followed
/// by the magnitude, e.g. `-00:00:01.500`.
#[must_use]
pub fn format_delta(t: &DateTime<Utc>, start: &DateTime<Utc>, use_unix_time: bool) -> String {
    let delta_ms = t.signed_duration_since(*start).num_milliseconds();

    if use_unix_time {
        return delta_ms.to_string();
    }

    let (sign, magnitude) = if delta_ms < 0 {
        ("-", delta_ms.unsigned_abs())
    } else {
        ("", delta_ms as u64)
    };

    let hours = magnitude / 3_600_000;
    let minutes = (magnitude / 60_000) % 60;
    let seconds = (magnitude / 1_000) % 60;
    let millis = magnitude % 1_000;

    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}
