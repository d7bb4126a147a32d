//! `[log]` section
//!
//! Selects how much cointrail reports and in which shape. At `info` every
//! accepted click or round event produces one line carrying `session_id`
//! plus `coin_id`/`coin_value` or `event_type`; failed appends are logged at
//! `error`. A `--log-level` flag on the command line takes precedence.

use serde::Deserialize;

/// Verbosity of the server log
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Adds per-request spans from the HTTP trace layer
    Trace,
    /// Adds session file creation
    Debug,
    /// One line per logged click or round event
    #[default]
    Info,
    Warn,
    /// Only failed appends and startup failures
    Error,
}

impl LogLevel {
    /// Directive passed to the tracing `EnvFilter`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Shape of each log line
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Plain text for a terminal
    #[default]
    Console,
    /// One JSON object per line, fields kept structured for log collectors
    Json,
}

/// `[log]` section of `cointrail.toml`
///
/// ```toml
/// [log]
/// level = "info"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}
