//! Session identification
//!
//! `SessionId` groups every record from one play session and names the files
//! those records are appended to.

use std::fmt;

use serde_json::Value;

use crate::{ProtocolError, Result};

/// Client-supplied session identifier
///
/// The identifier is opaque: the server never generates or interprets it.
/// It only guarantees the value is non-empty and safe to embed in a file
/// name inside the data directory.
///
/// # Example
///
/// ```
/// use cointrail_protocol::SessionId;
///
/// let session = SessionId::new("a1b2c3").unwrap();
/// assert_eq!(session.as_str(), "a1b2c3");
/// assert!(SessionId::new("../etc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session ID from a string
    ///
    /// # Errors
    ///
    /// `MissingSessionId` for an empty string, `InvalidSessionId` when the
    /// value contains a path separator or NUL, or is `.` / `..`.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(ProtocolError::MissingSessionId);
        }
        if id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
            return Err(ProtocolError::InvalidSessionId);
        }
        Ok(Self(id))
    }

    /// Extract a session ID from the raw `sessionId` payload field
    ///
    /// Falsy values (absent, `null`, `""`, `false`, `0`, `[]`, `{}`) count as
    /// missing. A non-zero number is used as its decimal text.
    pub fn from_value(value: Option<&Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                Err(ProtocolError::MissingSessionId)
            }
            Some(Value::String(s)) => Self::new(s.as_str()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
                Err(ProtocolError::MissingSessionId)
            }
            Some(Value::Number(n)) => Self::new(n.to_string()),
            Some(Value::Array(a)) if a.is_empty() => Err(ProtocolError::MissingSessionId),
            Some(Value::Object(o)) if o.is_empty() => Err(ProtocolError::MissingSessionId),
            Some(_) => Err(ProtocolError::InvalidSessionId),
        }
    }

    /// Get the session ID as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
