//! HTTP response helpers

use axum::Json;
use axum::http::StatusCode;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderName,
};
use axum::response::{IntoResponse, Response};

use super::json_types::AckResponse;

/// Headers sent in answer to an OPTIONS probe on the ingestion endpoints
pub const PREFLIGHT_HEADERS: [(HeaderName, &str); 3] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
];

/// 200 `{"status":"ok"}`
pub fn ack_response() -> Response {
    (StatusCode::OK, Json(AckResponse::OK)).into_response()
}

/// 200 with an empty body and permissive CORS headers
pub fn preflight_response() -> Response {
    (StatusCode::OK, PREFLIGHT_HEADERS).into_response()
}
