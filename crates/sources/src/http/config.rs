//! HTTP source configuration
//!
//! Configuration options for the coin game ingestion endpoint.

/// Default HTTP port
const DEFAULT_PORT: u16 = 5000;

/// Default maximum payload size (1MB, a click event is ~300 bytes)
const DEFAULT_MAX_PAYLOAD_SIZE: usize = 1024 * 1024;

/// HTTP source configuration
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub address: String,

    /// Listen port
    pub port: u16,

    /// Maximum request payload size in bytes
    pub max_payload_size: usize,

    /// Add `Access-Control-Allow-Origin: *` to every response
    ///
    /// OPTIONS on the ingestion endpoints is answered either way.
    pub cors_enabled: bool,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            cors_enabled: true,
        }
    }
}

impl HttpSourceConfig {
    /// Create config with custom port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address to bind to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}
