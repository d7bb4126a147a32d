//! Cointrail Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! An empty file (or no file at all) gives a working server: port 5000 on all
//! interfaces, session files in the working directory.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use cointrail_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[server]\nport = 8080").unwrap();
//! assert_eq!(config.server.port, 8080);
//! ```
//!
//! # Example Full Config
//!
//! ```toml
//! [server]
//! address = "0.0.0.0"
//! port = 5000
//! max_payload_size = 1048576
//! cors_enabled = true
//!
//! [storage]
//! path = "data/"
//!
//! [log]
//! level = "info"
//! format = "console"
//! ```

mod error;
mod logging;
mod server;
mod storage;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use server::ServerConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Session log storage
    pub storage: StorageConfig,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read, contains invalid TOML, or fails
    /// validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::str::FromStr;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.address, "0.0.0.0");
        assert!(config.server.cors_enabled);
        assert_eq!(config.storage.path, PathBuf::from("."));
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[server]
address = "127.0.0.1"
port = 8081
max_payload_size = 65536
cors_enabled = false

[storage]
path = "data/sessions"

[log]
level = "debug"
format = "json"
"#;
        let config = Config::from_str(toml).unwrap();

        assert_eq!(config.server.address, "127.0.0.1");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.max_payload_size, 65536);
        assert!(!config.server.cors_enabled);
        assert_eq!(config.storage.path, PathBuf::from("data/sessions"));
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_str("invalid { toml");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_wrong_type() {
        let result = Config::from_str("[server]\nport = \"five thousand\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_from_missing_file() {
        let result = Config::from_file("/nonexistent/cointrail.toml");
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
