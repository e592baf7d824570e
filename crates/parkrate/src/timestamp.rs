//! Query timestamp parsing shared by the HTTP and CLI surfaces.

use chrono::{DateTime, FixedOffset};

/// ISO-8601 subset with an explicit offset: `2015-07-01T07:00:00-05:00`.
pub const DATETIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%z";

pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, DATETIME_FMT).ok()
}
