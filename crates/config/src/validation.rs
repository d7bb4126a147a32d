//! Configuration validation
//!
//! Rejects values that would only fail later at bind or write time.

use crate::Config;
use crate::error::{ConfigError, Result};

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let server = &config.server;

    if server.address.trim().is_empty() {
        return Err(ConfigError::invalid("server", "address", "must not be empty"));
    }
    if server.port == 0 {
        return Err(ConfigError::invalid("server", "port", "must be between 1 and 65535"));
    }
    if server.max_payload_size == 0 {
        return Err(ConfigError::invalid(
            "server",
            "max_payload_size",
            "must be greater than 0",
        ));
    }
    if config.storage.path.as_os_str().is_empty() {
        return Err(ConfigError::invalid("storage", "path", "must not be empty"));
    }

    Ok(())
}
