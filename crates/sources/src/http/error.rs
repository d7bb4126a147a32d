//! HTTP source error types
//!
//! Structured errors for the HTTP ingestion source. Request-level variants
//! map to the JSON error bodies the game client expects.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cointrail_protocol::ProtocolError;
use cointrail_sinks::SinkError;

use super::json_types::ErrorResponse;

/// HTTP source errors
#[derive(Debug, thiserror::Error)]
pub enum HttpSourceError {
    /// Failed to bind to address
    #[error("failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Hyper/HTTP error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request body has no usable `sessionId`
    #[error("Missing sessionId")]
    MissingSessionId,

    /// `sessionId` cannot be used in a file name
    #[error("Invalid sessionId")]
    InvalidSessionId,

    /// Body is not a JSON object
    #[error("invalid JSON body: {0}")]
    InvalidBody(String),

    /// Payload too large
    #[error("payload exceeds limit of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Session log could not be written
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl HttpSourceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingSessionId | Self::InvalidSessionId | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Bind { .. } | Self::Http(_) | Self::Sink(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message returned to the client
    ///
    /// Internal details (paths, OS errors) stay in the server log.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::MissingSessionId => "Missing sessionId",
            Self::InvalidSessionId => "Invalid sessionId",
            Self::InvalidBody(_) => "Invalid JSON body",
            Self::PayloadTooLarge { .. } => "Payload too large",
            Self::Sink(_) => "Failed to write event",
            Self::Bind { .. } | Self::Http(_) => "Internal server error",
        }
    }
}

impl From<ProtocolError> for HttpSourceError {
    fn from(e: ProtocolError) -> Self {
        match e {
            ProtocolError::MissingSessionId => Self::MissingSessionId,
            ProtocolError::InvalidSessionId => Self::InvalidSessionId,
        }
    }
}

impl IntoResponse for HttpSourceError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.client_message());
        (self.status_code(), Json(body)).into_response()
    }
}
