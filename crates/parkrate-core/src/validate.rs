// ── Query interval validation ──
//
// Rate-agnostic well-formedness checks. Says nothing about whether a
// rule will match, only whether the interval is worth matching.

use chrono::{DateTime, FixedOffset};

use crate::error::RangeError;

/// Check that `start` precedes `end` and both share a calendar date.
///
/// Ordering compares instants. The date check uses each timestamp's own
/// local date, as written by the caller.
pub fn validate_range(start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> Result<(), RangeError> {
    if start >= end {
        return Err(RangeError::StartAfterEnd);
    }
    if start.date_naive() != end.date_naive() {
        return Err(RangeError::CrossDateRange);
    }
    Ok(())
}
