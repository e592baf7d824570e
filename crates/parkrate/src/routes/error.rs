use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use parkrate_core::RangeError;

use crate::timestamp::DATETIME_FMT;

/// Caller errors surfaced by the rate API. All map to 400 with an
/// `{"error": "..."}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("start and end timestamp must be in format {}", DATETIME_FMT)]
    TimestampFormat,

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("supplied JSON is invalid.")]
    InvalidJson,

    #[error("supplied JSON contains invalid rate objects")]
    InvalidRates,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.to_string() });
        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}
