//! Time utilities.
//!
//! Timestamps are `i64` milliseconds since the Unix epoch, UTC, matching the
//! unit the exchange reports in `epoch_millis`.

use chrono::Utc;

/// Returns the current time in milliseconds since the Unix epoch.
#[inline]
pub fn milliseconds() -> i64 {
    Utc::now().timestamp_millis()
}

/// Returns the current time in seconds since the Unix epoch.
#[inline]
pub fn seconds() -> i64 {
    Utc::now().timestamp()
}

/// Converts a millisecond timestamp to an ISO 8601 string
/// (e.g. `2020-07-10T05:17:26.716Z`).
pub fn iso8601(timestamp: i64) -> Option<String> {
    chrono::DateTime::from_timestamp_millis(timestamp)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

/// Parses an ISO 8601 / RFC 3339 string into a millisecond timestamp.
pub fn parse_iso8601(datetime: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(datetime)
        .ok()
        .map(|dt| dt.timestamp_millis())
}
