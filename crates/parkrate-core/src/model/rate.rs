// ── Rate rule ──
//
// The atomic unit the store matches against. One weekday, one
// time-of-day span in a named zone, one price. Immutable once built.

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

/// A parking rate in effect on one weekday.
///
/// The rate applies from `start_time` inclusive until `end_time`
/// exclusive. `start_time < end_time` is expected of well-formed input
/// but is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RateRule {
    #[serde(serialize_with = "weekday_index")]
    weekday: Weekday,
    start_time: NaiveTime,
    end_time: NaiveTime,
    tz: Tz,
    /// Smallest currency unit (e.g. cents).
    price: u64,
}

impl RateRule {
    pub fn new(weekday: Weekday, start_time: NaiveTime, end_time: NaiveTime, tz: Tz, price: u64) -> Self {
        Self {
            weekday,
            start_time,
            end_time,
            tz,
            price,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Monday = 0 … Sunday = 6.
    pub fn weekday_index(&self) -> u32 {
        self.weekday.num_days_from_monday()
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    /// Whether `[start, end]` lies inside this rule's span.
    pub fn contains(&self, start: NaiveTime, end: NaiveTime) -> bool {
        start >= self.start_time && end <= self.end_time
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn weekday_index<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(weekday.num_days_from_monday())
}
