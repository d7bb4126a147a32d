//! HTTP Source - REST API for coin game telemetry
//!
//! Receives click and round/session events from the browser game and appends
//! each one to the session's CSV log.
//!
//! # Endpoints
//!
//! | Method/Path | Success | Failure |
//! |-------------|---------|---------|
//! | `POST /api/coin_pickup` | 200 `{"status":"ok"}` | 400 `{"error":"Missing sessionId"}` |
//! | `POST /api/round_event` | 200 `{"status":"ok"}` | 400 `{"error":"Missing sessionId"}` |
//! | `OPTIONS /api/coin_pickup`, `/api/round_event` | 200, empty body, CORS headers | - |
//! | `GET /` | 200 `{"status":"running",...}` | - |
//!
//! # Protocol
//!
//! ```text
//! POST /api/coin_pickup
//! Content-Type: application/json
//!
//! {"sessionId":"k3x9","round":1,"coinId":"c7","coin_value":5,"screenPos":{"x":10,"y":20}}
//! ```
//!
//! # Example
//!
//! ```ignore
//! use cointrail_sinks::session_csv::{SessionCsvConfig, SessionCsvSink};
//! use cointrail_sources::http::{HttpSource, HttpSourceConfig};
//!
//! let config = HttpSourceConfig::with_port(5000);
//! let sink = SessionCsvSink::new(SessionCsvConfig::default());
//!
//! let source = HttpSource::new(config, sink);
//! source.run(cancel_token).await?;
//! ```

mod config;
mod error;
mod handlers;
mod json_types;
mod response;


use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::middleware;
use axum::response::Response;
use axum::routing::{get, post};
use cointrail_sinks::session_csv::SessionCsvSink;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

pub use config::HttpSourceConfig;
pub use error::HttpSourceError;

use handlers::{HandlerState, coin_pickup, health_check, preflight, round_event};

/// HTTP source for the coin game API
pub struct HttpSource {
    config: HttpSourceConfig,
    sink: SessionCsvSink,
    running: Arc<AtomicBool>,
}

impl HttpSource {
    /// Create a new HTTP source
    pub fn new(config: HttpSourceConfig, sink: SessionCsvSink) -> Self {
        Self {
            config,
            sink,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if the source is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Run the HTTP source
    ///
    /// Binds to the configured address and starts accepting HTTP requests.
    /// Returns when cancelled or an unrecoverable error occurs.
    pub async fn run(self, cancel: CancellationToken) -> Result<(), HttpSourceError> {
        let bind_addr = self.config.bind_address();

        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| HttpSourceError::Bind {
                address: bind_addr.clone(),
                source: e,
            })?;

        self.running.store(true, Ordering::Relaxed);

        tracing::info!(
            address = %bind_addr,
            data_dir = %self.sink.dir().display(),
            cors = self.config.cors_enabled,
            "HTTP source listening"
        );

        let state = Arc::new(HandlerState {
            sink: self.sink.clone(),
            max_payload_size: self.config.max_payload_size,
        });

        let app = build_router(state, self.config.cors_enabled);

        // Run server with graceful shutdown
        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal(cancel));

        let result = server.await.map_err(|e| HttpSourceError::Http(e.to_string()));

        self.running.store(false, Ordering::Relaxed);

        tracing::info!("HTTP source stopped");

        result
    }
}

/// Build the axum router
fn build_router(state: Arc<HandlerState>, cors_enabled: bool) -> Router {
    let body_limit = state.max_payload_size;

    let router = Router::new()
        .route("/", get(health_check))
        .route("/api/coin_pickup", post(coin_pickup).options(preflight))
        .route("/api/round_event", post(round_event).options(preflight))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    let router = if cors_enabled {
        router.layer(middleware::map_response(allow_any_origin))
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}

/// Let browser clients on any origin read the response
///
/// Preflight is answered by the `preflight` handler itself, so its headers
/// stay exactly as listed in `PREFLIGHT_HEADERS`.
async fn allow_any_origin(mut response: Response) -> Response {
    response
        .headers_mut()
        .entry(ACCESS_CONTROL_ALLOW_ORIGIN)
        .or_insert(HeaderValue::from_static("*"));
    response
}

/// Shutdown signal future
async fn shutdown_signal(cancel: CancellationToken) {
    cancel.cancelled().await;
}
