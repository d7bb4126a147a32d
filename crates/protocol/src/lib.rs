//! Cointrail Protocol - Record types for the coin game telemetry sink
//!
//! This crate provides the types that flow from the HTTP source to the
//! session CSV sink:
//! - `SessionId` - Client-supplied session identifier, safe to use in a file name
//! - `RecordKind` - Click or round/session event, with its canonical CSV header
//! - `ClickEvent` / `RoundEvent` - Loosely typed request payloads
//! - `Record` - Turns a payload into one CSV row
//!
//! # Design Principles
//!
//! - **Pass-through**: Client values are recorded as sent, never validated
//! - **Absent is empty**: Any missing field becomes an empty cell
//! - **Fixed columns**: Column order never changes, existing files stay compatible

mod cell;
mod error;
mod record;
mod session;

pub use cell::cell;
pub use error::ProtocolError;
pub use record::{CLICK_HEADER, ClickEvent, ROUND_HEADER, Record, RecordKind, RoundEvent};
pub use session::SessionId;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

// Test modules - only compiled during testing
#[cfg(test)]
mod cell_test;
#[cfg(test)]
mod session_test;
