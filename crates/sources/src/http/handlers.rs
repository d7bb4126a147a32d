//! HTTP route handlers
//!
//! Axum handlers for the coin game ingestion endpoints.
//!
//! # Endpoints
//!
//! - `POST /api/coin_pickup` - Log a coin pickup to `<session>_clicks.csv`
//! - `POST /api/round_event` - Log a round/session transition to `<session>_events.csv`
//! - `OPTIONS` on both - CORS preflight, answered before the body is touched
//! - `GET /` - Health check

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cointrail_protocol::{ClickEvent, Record, RoundEvent, SessionId, cell};
use cointrail_sinks::session_csv::SessionCsvSink;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HttpSourceError;
use super::json_types::HealthResponse;
use super::response::{ack_response, preflight_response};

/// Shared state for handlers
pub struct HandlerState {
    pub sink: SessionCsvSink,
    pub max_payload_size: usize,
}

/// POST /api/coin_pickup - Log a coin pickup
pub async fn coin_pickup(
    State(state): State<Arc<HandlerState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let (session, event) = match parse_record::<ClickEvent>(body, state.max_payload_size) {
        Ok(parsed) => parsed,
        Err(e) => return e.into_response(),
    };

    let coin_id = cell(event.coin_id.as_ref());
    let coin_value = cell(event.coin_value.as_ref());

    match state.sink.write(session.clone(), event).await {
        Ok(appended) => {
            tracing::info!(
                session_id = %session,
                coin_id = %coin_id,
                coin_value = %coin_value,
                server_received_ms = appended.server_received_ms,
                "logged click"
            );
            ack_response()
        }
        Err(e) => {
            tracing::error!(session_id = %session, error = %e, "failed to log click");
            HttpSourceError::from(e).into_response()
        }
    }
}

/// POST /api/round_event - Log a round or session lifecycle transition
pub async fn round_event(
    State(state): State<Arc<HandlerState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let (session, event) = match parse_record::<RoundEvent>(body, state.max_payload_size) {
        Ok(parsed) => parsed,
        Err(e) => return e.into_response(),
    };

    let event_type = cell(event.event_type.as_ref());

    match state.sink.write(session.clone(), event).await {
        Ok(appended) => {
            tracing::info!(
                session_id = %session,
                event_type = %event_type,
                server_received_ms = appended.server_received_ms,
                "logged round event"
            );
            ack_response()
        }
        Err(e) => {
            tracing::error!(session_id = %session, error = %e, "failed to log round event");
            HttpSourceError::from(e).into_response()
        }
    }
}

/// OPTIONS /api/* - CORS preflight
pub async fn preflight() -> Response {
    preflight_response()
}

/// GET / - Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::RUNNING))
}

/// Turn a request body into a record and its session
///
/// The content type is not checked: any body is parsed as JSON, and it must
/// be an object. No file is touched when this fails.
fn parse_record<R>(
    body: Result<Bytes, BytesRejection>,
    max_payload_size: usize,
) -> Result<(SessionId, R), HttpSourceError>
where
    R: Record + DeserializeOwned,
{
    // The `DefaultBodyLimit` layer enforces the size limit; its rejection
    // only needs mapping to our error body here.
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            HttpSourceError::PayloadTooLarge {
                limit: max_payload_size,
            }
        } else {
            HttpSourceError::InvalidBody(rejection.body_text())
        }
    })?;

    let value: Value =
        serde_json::from_slice(&body).map_err(|e| HttpSourceError::InvalidBody(e.to_string()))?;
    if !value.is_object() {
        return Err(HttpSourceError::InvalidBody(
            "expected a JSON object".into(),
        ));
    }

    let record: R =
        serde_json::from_value(value).map_err(|e| HttpSourceError::InvalidBody(e.to_string()))?;
    let session = record.session_id()?;

    Ok((session, record))
}
