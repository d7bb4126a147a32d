//! Cointrail - Sources
//!
//! Network sources that receive game telemetry and hand each record to the
//! session CSV sink.
//!
//! # Available Sources
//!
//! - **HTTP** - JSON endpoints for the browser game (`/api/coin_pickup`, `/api/round_event`)
//!
//! # Design Principles
//!
//! - **One request, one row**: No batching; a request is acknowledged only after its row is on disk
//! - **Async I/O**: Built on `tokio` and `axum`; file appends run on the blocking pool
//! - **Stateless handlers**: Nothing is shared between requests except immutable config

pub mod http;

pub use http::{HttpSource, HttpSourceConfig, HttpSourceError};
