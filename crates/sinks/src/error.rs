//! Sink error types

use std::io;

use thiserror::Error;

/// Errors that can occur while persisting a record
#[derive(Debug, Error)]
pub enum SinkError {
    /// Data directory could not be created
    #[error("failed to initialize data directory '{path}': {source}")]
    Init {
        path: String,
        #[source]
        source: io::Error,
    },

    /// File system operation on a session log failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Row could not be encoded as CSV
    #[error("failed to encode row: {0}")]
    Encode(String),

    /// Blocking write task panicked or was cancelled
    #[error("write task failed: {0}")]
    Task(String),
}

impl SinkError {
    /// Create an I/O error for a path
    pub fn io(path: &std::path::Path, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl From<csv::Error> for SinkError {
    fn from(e: csv::Error) -> Self {
        Self::Encode(e.to_string())
    }
}
