//! Cointrail - Sinks
//!
//! Output sinks for cointrail. Records arrive one per HTTP request and are
//! appended straight to disk; there is no batching or buffering between the
//! handler and the file.
//!
//! ```text
//! [HTTP handler] --Record--> [SessionCsvSink] --one write(2)--> <data_dir>/<session>_<kind>.csv
//! ```
//!
//! # Available Sinks
//!
//! | Sink | Purpose |
//! |------|---------|
//! | `session_csv` | One append-only CSV file per session and record kind |
//!
//! # Example
//!
//! ```ignore
//! use cointrail_sinks::session_csv::{SessionCsvConfig, SessionCsvSink};
//!
//! let sink = SessionCsvSink::new(SessionCsvConfig::default().with_path("data"));
//! sink.init()?;
//!
//! let session = event.session_id()?;
//! let appended = sink.write(session, event).await?;
//! ```

/// Session CSV sink - per-session append-only CSV logs
pub mod session_csv;

mod error;

pub use error::SinkError;
