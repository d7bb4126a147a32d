//! Session log storage configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Where session CSV files are written
///
/// # Example
///
/// ```toml
/// [storage]
/// path = "/var/lib/cointrail"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory, created at startup if missing
    /// Default: "." (working directory)
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
        }
    }
}
