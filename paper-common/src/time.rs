//! Timestamp utilities
//!
//! `papers.date_added` is stored as Unix milliseconds (UTC) so that range
//! filters and ordering are plain integer comparisons in SQLite.

use chrono::{DateTime, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Convert a timestamp to the stored millisecond representation
pub fn to_millis(ts: DateTime<Utc>) -> i64 {
    ts.timestamp_millis()
}

/// Convert a stored millisecond value back to a timestamp
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
