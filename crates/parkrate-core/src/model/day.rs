// ── Weekday names ──
//
// The short names accepted in a rate definition's `days` list. The
// spelling is fixed ("tues", "thurs") and matching is exact.

use chrono::Weekday;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A weekday as written in a rate definition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum DayName {
    Mon,
    #[strum(serialize = "tues")]
    Tues,
    Wed,
    #[strum(serialize = "thurs")]
    Thurs,
    Fri,
    Sat,
    Sun,
}

impl From<DayName> for Weekday {
    fn from(day: DayName) -> Self {
        match day {
            DayName::Mon => Weekday::Mon,
            DayName::Tues => Weekday::Tue,
            DayName::Wed => Weekday::Wed,
            DayName::Thurs => Weekday::Thu,
            DayName::Fri => Weekday::Fri,
            DayName::Sat => Weekday::Sat,
            DayName::Sun => Weekday::Sun,
        }
    }
}

impl From<Weekday> for DayName {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayName::Mon,
            Weekday::Tue => DayName::Tues,
            Weekday::Wed => DayName::Wed,
            Weekday::Thu => DayName::Thurs,
            Weekday::Fri => DayName::Fri,
            Weekday::Sat => DayName::Sat,
            Weekday::Sun => DayName::Sun,
        }
    }
}
