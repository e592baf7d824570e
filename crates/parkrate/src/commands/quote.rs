//! One-shot price lookup against a rates document.

use serde_json::json;

use parkrate_core::{InMemoryRateStore, RateStore};

use crate::cli::{GlobalOpts, QuoteArgs};
use crate::error::CliError;
use crate::output;
use crate::routes::rates::UNAVAILABLE;
use crate::timestamp::parse_timestamp;

pub fn handle(args: &QuoteArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let start = parse_timestamp(&args.start).ok_or_else(|| CliError::Timestamp {
        value: args.start.clone(),
    })?;
    let end = parse_timestamp(&args.end).ok_or_else(|| CliError::Timestamp {
        value: args.end.clone(),
    })?;

    let cfg = super::load(global)?;
    let store = InMemoryRateStore::with_basis(cfg.matching.time_basis);
    store.set_rates(&super::load_rules(args.rates.as_deref(), &cfg)?);

    let price = store
        .get_rate_for_time_range(&start, &end)?
        .map_or_else(|| json!(UNAVAILABLE), |rule| json!(rule.price()));

    let body = json!({ "price": price });
    let out = output::render_single(global.output, &body, |b| match &b["price"] {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    })?;
    output::print_output(&out);
    Ok(())
}
