//! HTTP server configuration

use serde::Deserialize;

/// HTTP server configuration
///
/// # Example
///
/// ```toml
/// [server]
/// address = "0.0.0.0"
/// port = 5000
/// max_payload_size = 1048576
/// cors_enabled = true
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    /// Default: "0.0.0.0"
    pub address: String,

    /// Listen port
    /// Default: 5000
    pub port: u16,

    /// Maximum request payload size in bytes
    /// Default: 1MB
    pub max_payload_size: usize,

    /// Add `Access-Control-Allow-Origin: *` to responses
    /// Default: true
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".into(),
            port: 5000,
            max_payload_size: 1024 * 1024,
            cors_enabled: true,
        }
    }
}
