//! Log file name derivation
//!
//! Directory-mode file sinks derive their file name from the logger's start
//! time so that every logger sharing a config (and therefore a start time)
//! produces a predictable, collision-checked family of files.

use super::timestamp::format_timestamp;
use chrono::{DateTime, Utc};

/// Derive a log file name from a start time and an optional id.
///
/// The base name is the formatted start time; with an id the result is
/// `{base}_{id}.log`, otherwise `{base}.log`. Ids are taken verbatim,
/// including multi-byte content; equality of derived names is byte-for-byte.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use easylog::core::naming::derive_file_name;
///
/// let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(
///     derive_file_name(&epoch, false, Some("server")),
///     "01-01-1970T00:00:00.000_server.log"
/// );
/// ```
#[must_use]
pub fn derive_file_name(
    start_time: &DateTime<Utc>,
    use_unix_time: bool,
    id: Option<&str>,
) -> String {
    let base = format_timestamp(start_time, use_unix_time);
    match id {
        Some(id) => format!("{base}_{id}.log"),
        None => format!("{base}.log"),
    }
}
