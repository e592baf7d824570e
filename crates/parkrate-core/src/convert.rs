// ── Definition-to-rule conversion ──
//
// Expands compact `RateDefinition`s into the flat `RateRule` table the
// store scans: one rule per listed weekday, all sharing the span, zone
// and price. No cross-definition checks happen here; overlapping
// definitions are accepted as-is.

use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;

use crate::error::{CoreError, DefinitionError};
use crate::model::{DayName, RateDefinition, RateRule};

/// `strftime` shape of one boundary in a `times` span.
pub const TIME_FMT: &str = "%H%M";

/// Expand a whole batch. The first bad definition aborts the batch, so a
/// caller never holds a partially converted table.
pub fn parse_definitions(definitions: &[RateDefinition]) -> Result<Vec<RateRule>, CoreError> {
    let mut rules = Vec::with_capacity(definitions.len());
    for (index, definition) in definitions.iter().enumerate() {
        let expanded = parse_definition(definition).map_err(|source| {
            tracing::debug!(index, error = %source, "rejecting rate definition");
            CoreError::Definition { index, source }
        })?;
        rules.extend(expanded);
    }
    Ok(rules)
}

/// Expand one definition into one rule per weekday in `days`.
pub fn parse_definition(definition: &RateDefinition) -> Result<Vec<RateRule>, DefinitionError> {
    let days = required(definition.days.as_deref(), "days")?;
    let times = required(definition.times.as_deref(), "times")?;
    let tz_name = required(definition.tz.as_deref(), "tz")?;
    let price = definition
        .price
        .ok_or(DefinitionError::MissingField { field: "price" })?;

    let (start_time, end_time) = parse_span(times)?;
    let tz = parse_timezone(tz_name)?;
    let price = u64::try_from(price).map_err(|_| DefinitionError::InvalidPrice { price })?;

    days.split(',')
        .map(|token| {
            parse_weekday(token).map(|weekday| RateRule::new(weekday, start_time, end_time, tz, price))
        })
        .collect()
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, DefinitionError> {
    value.ok_or(DefinitionError::MissingField { field })
}

/// Split `HHMM-HHMM` into its two boundaries.
fn parse_span(times: &str) -> Result<(NaiveTime, NaiveTime), DefinitionError> {
    let invalid = || DefinitionError::InvalidTimeFormat {
        value: times.to_owned(),
    };
    let (start, end) = times.split_once('-').ok_or_else(invalid)?;
    let start = parse_time(start).ok_or_else(invalid)?;
    let end = parse_time(end).ok_or_else(invalid)?;
    Ok((start, end))
}

/// Strict four-digit, 24-hour time of day.
fn parse_time(raw: &str) -> Option<NaiveTime> {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveTime::parse_from_str(raw, TIME_FMT).ok()
}

fn parse_timezone(name: &str) -> Result<Tz, DefinitionError> {
    Tz::from_str(name).map_err(|_| DefinitionError::InvalidTimezone {
        name: name.to_owned(),
    })
}

fn parse_weekday(token: &str) -> Result<Weekday, DefinitionError> {
    DayName::from_str(token)
        .map(Weekday::from)
        .map_err(|_| DefinitionError::InvalidWeekday {
            token: token.to_owned(),
        })
}
