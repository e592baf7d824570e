// ── Raw rate definitions ──
//
// Wire/file shape of the compact, human-authored rate table. Every
// field is optional here so a missing one surfaces as a parser error
// naming the field instead of a generic deserialization failure.

use serde::{Deserialize, Serialize};

/// One compact rate definition, e.g.
///
/// ```json
/// { "days": "mon,tues,thurs", "times": "0900-2100", "tz": "America/Chicago", "price": 1500 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDefinition {
    /// Comma-separated weekday names.
    pub days: Option<String>,
    /// `HHMM-HHMM`, 24-hour.
    pub times: Option<String>,
    /// IANA timezone name.
    pub tz: Option<String>,
    pub price: Option<i64>,
}

impl RateDefinition {
    pub fn new(days: &str, times: &str, tz: &str, price: i64) -> Self {
        Self {
            days: Some(days.into()),
            times: Some(times.into()),
            tz: Some(tz.into()),
            price: Some(price),
        }
    }
}

/// A full replacement table: `{"rates": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesDocument {
    pub rates: Vec<RateDefinition>,
}
