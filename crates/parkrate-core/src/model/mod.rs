pub mod day;
pub mod definition;
pub mod rate;

pub use day::DayName;
pub use definition::{RateDefinition, RatesDocument};
pub use rate::RateRule;
