//! Timestamp formatting utilities
//!
//! Log lines carry an ISO 8601 UTC timestamp with millisecond precision,
//! e.g. `2021-07-14T19:20:44.156Z`.

use chrono::{DateTime, Utc};

/// strftime pattern for ISO 8601 with milliseconds and a `Z` designator
pub const ISO8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format a `DateTime<Utc>` as ISO 8601 with milliseconds
///
/// # Examples
///
/// ```
/// use module_logger::core::timestamp::format_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let datetime = Utc.with_ymd_and_hms(2021, 7, 14, 19, 20, 44).unwrap();
/// assert_eq!(format_timestamp(&datetime), "2021-07-14T19:20:44.000Z");
/// ```
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Utc>) -> String {
    datetime.format(ISO8601_MILLIS).to_string()
}
