// ── Rate store ──
//
// The capability every rate backend provides: replace the whole table,
// and look up the rule covering a query interval.

mod memory;

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::model::RateRule;

pub use memory::InMemoryRateStore;

/// Clock the query interval is read in before it is compared to a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeBasis {
    /// Compare the caller's local weekday and time-of-day as written,
    /// regardless of the rule's zone.
    #[default]
    WallClock,
    /// Convert the interval into each rule's zone first. Both ends must
    /// land on the same local date there.
    RuleZone,
}

impl TimeBasis {
    /// Whether `rule` covers `[start, end]` under this basis.
    pub fn covers(self, rule: &RateRule, start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> bool {
        match self {
            Self::WallClock => rule.weekday() == start.weekday() && rule.contains(start.time(), end.time()),
            Self::RuleZone => {
                let tz = rule.tz();
                let (start, end) = (start.with_timezone(&tz), end.with_timezone(&tz));
                rule.weekday() == start.weekday()
                    && start.date_naive() == end.date_naive()
                    && rule.contains(start.time(), end.time())
            }
        }
    }
}

/// A holder of the authoritative rate table.
///
/// Implementations must install a replacement table atomically: a
/// concurrent lookup sees either the whole old table or the whole new
/// one.
pub trait RateStore: Send + Sync {
    /// Replace the entire table with a copy of `rules`. No validation.
    fn set_rates(&self, rules: &[RateRule]);

    /// First rule, in table order, that covers `[start, end]`.
    ///
    /// `Ok(None)` means the interval is valid but nothing covers it.
    fn get_rate_for_time_range(
        &self,
        start: &DateTime<FixedOffset>,
        end: &DateTime<FixedOffset>,
    ) -> Result<Option<RateRule>, RangeError>;

    /// Snapshot of the current table, in table order.
    fn rules(&self) -> Vec<RateRule>;
}
