// ── Core error types ──
//
// Caller input errors from parkrate-core. Neither family is transient:
// a rejected range or definition is reported back unchanged and never
// retried. "No matching rule" is not an error and never appears here.

use thiserror::Error;

/// Rejection of a query interval by the range validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("start timestamp must be before end timestamp")]
    StartAfterEnd,

    #[error("start timestamp and end timestamp must be on the same date")]
    CrossDateRange,
}

/// Rejection of a raw rate definition by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("rate definition is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("invalid time span '{value}': expected HHMM-HHMM in 24-hour time")]
    InvalidTimeFormat { value: String },

    #[error("unknown timezone '{name}'")]
    InvalidTimezone { name: String },

    #[error("unknown weekday '{token}': expected one of mon, tues, wed, thurs, fri, sat, sun")]
    InvalidWeekday { token: String },

    #[error("invalid price {price}: must be a non-negative integer")]
    InvalidPrice { price: i64 },
}

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Query errors ─────────────────────────────────────────────────
    #[error(transparent)]
    Range(#[from] RangeError),

    // ── Definition errors ────────────────────────────────────────────
    #[error("rate definition #{index} rejected: {source}")]
    Definition {
        index: usize,
        #[source]
        source: DefinitionError,
    },
}
