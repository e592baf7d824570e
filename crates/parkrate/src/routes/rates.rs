use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use serde_json::{Value, json};

use parkrate_core::{RatesDocument, parse_definitions};

use super::error::ApiError;
use crate::state::AppState;
use crate::timestamp::parse_timestamp;

pub const RATE_PATH: &str = "/api/v1/rates";

/// Body value returned when no rule covers the window.
pub const UNAVAILABLE: &str = "Unavailable";

/// Build the rates sub-router.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(RATE_PATH, get(get_rates).post(post_rates))
}

const START_PARAM: &str = "start_timestamp";
const END_PARAM: &str = "end_timestamp";

/// First value of `key`; repeats later in the query string are ignored.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// GET /api/v1/rates: price for a start/end window.
async fn get_rates(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejecting unreadable query string");
            return Err(ApiError::TimestampFormat);
        }
    };

    let start = first_param(&params, START_PARAM).and_then(parse_timestamp);
    let end = first_param(&params, END_PARAM).and_then(parse_timestamp);
    let (Some(start), Some(end)) = (start, end) else {
        tracing::warn!(?params, "rejecting malformed timestamps");
        return Err(ApiError::TimestampFormat);
    };

    let rate = state
        .store
        .get_rate_for_time_range(&start, &end)
        .inspect_err(|err| tracing::warn!(%start, %end, error = %err, "rejecting time range"))?;

    // Valid request with no covering rule is a normal answer, not an error.
    let price = rate.map_or_else(|| json!(UNAVAILABLE), |rule| json!(rule.price()));
    Ok(Json(json!({ "price": price })))
}

/// POST /api/v1/rates: replace the whole rate table.
///
/// Every definition is parsed before the store is touched, so a batch
/// with one bad entry leaves the current table in place.
async fn post_rates(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejecting unparseable rates body");
        ApiError::InvalidJson
    })?;

    let doc: RatesDocument = serde_json::from_value(payload).map_err(|err| {
        tracing::warn!(error = %err, "rejecting malformed rates document");
        ApiError::InvalidRates
    })?;

    let rules = parse_definitions(&doc.rates).map_err(|err| {
        tracing::warn!(error = %err, "rejecting rates batch");
        ApiError::InvalidRates
    })?;

    state.store.set_rates(&rules);
    tracing::info!(definitions = doc.rates.len(), rules = rules.len(), "rate table replaced");

    Ok(Json(json!({ "message": "New rates posted" })))
}
