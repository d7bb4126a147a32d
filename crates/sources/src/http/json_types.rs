//! JSON response types for the HTTP API
//!
//! Request payloads live in `cointrail_protocol` (`ClickEvent`, `RoundEvent`).

use serde::Serialize;

/// Acknowledgment of a logged record: `{"status":"ok"}`
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub status: &'static str,
}

impl AckResponse {
    pub const OK: Self = Self { status: "ok" };
}

/// Health check body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub const RUNNING: Self = Self {
        status: "running",
        message: "Coin Game backend active",
    };
}

/// Error response: `{"error":"..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Create an error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
