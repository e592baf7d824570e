//! Rate matching engine for parking price lookups.
//!
//! - **[`RateRule`]**: one weekday, one time-of-day span in a named zone,
//!   one price. Immutable.
//!
//! - **[`convert`]**: expands compact [`RateDefinition`]s (`"mon,wed"`,
//!   `"0900-2100"`, `"America/Chicago"`, `1500`) into flat rules.
//!
//! - **[`RateStore`]**: capability trait for holding the table and
//!   answering "which rule covers this interval". [`InMemoryRateStore`]
//!   swaps whole tables atomically behind an `ArcSwap`.
//!
//! - **[`validate_range`]**: rejects reversed or cross-date query
//!   intervals before any matching happens.
//!
//! The engine does no I/O and never blocks; transports wrap it.

pub mod convert;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use convert::{parse_definition, parse_definitions};
pub use error::{CoreError, DefinitionError, RangeError};
pub use model::{DayName, RateDefinition, RateRule, RatesDocument};
pub use store::{InMemoryRateStore, RateStore, TimeBasis};
pub use validate::validate_range;
