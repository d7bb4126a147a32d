//! Protocol error types
//!
//! Errors that can occur while turning a request payload into a record.

use thiserror::Error;

/// Errors that can occur during protocol operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// Payload carries no usable session identifier
    #[error("Missing sessionId")]
    MissingSessionId,

    /// Session identifier cannot be used as part of a file name
    #[error("Invalid sessionId")]
    InvalidSessionId,
}
