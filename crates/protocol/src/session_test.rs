//! Tests for SessionId

use serde_json::json;

use crate::{ProtocolError, SessionId};

// =============================================================================
// SessionId::new tests
// =============================================================================

#[test]
fn test_session_id_new() {
    let id = SessionId::new("k3x9-aa").unwrap();
    assert_eq!(id.as_str(), "k3x9-aa");
    assert_eq!(id.to_string(), "k3x9-aa");
}

#[test]
fn test_session_id_new_empty_is_missing() {
    assert_eq!(SessionId::new(""), Err(ProtocolError::MissingSessionId));
}

#[test]
fn test_session_id_rejects_path_components() {
    for bad in ["..", ".", "a/b", "../escape", "a\\b", "nul\0byte"] {
        assert_eq!(
            SessionId::new(bad),
            Err(ProtocolError::InvalidSessionId),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_session_id_allows_dots_inside() {
    let id = SessionId::new("v1.2..session").unwrap();
    assert_eq!(id.as_str(), "v1.2..session");
}

// =============================================================================
// SessionId::from_value tests
// =============================================================================

#[test]
fn test_from_value_string() {
    let value = json!("abc");
    let id = SessionId::from_value(Some(&value)).unwrap();
    assert_eq!(id.as_str(), "abc");
}

#[test]
fn test_from_value_number() {
    let value = json!(42);
    let id = SessionId::from_value(Some(&value)).unwrap();
    assert_eq!(id.as_str(), "42");
}

#[test]
fn test_from_value_falsy_is_missing() {
    assert_eq!(
        SessionId::from_value(None),
        Err(ProtocolError::MissingSessionId)
    );

    for falsy in [json!(null), json!(""), json!(false), json!(0), json!(0.0), json!([]), json!({})] {
        assert_eq!(
            SessionId::from_value(Some(&falsy)),
            Err(ProtocolError::MissingSessionId),
            "{falsy} should count as missing"
        );
    }
}

#[test]
fn test_from_value_structured_is_invalid() {
    let value = json!({"id": "abc"});
    assert_eq!(
        SessionId::from_value(Some(&value)),
        Err(ProtocolError::InvalidSessionId)
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(ProtocolError::MissingSessionId.to_string(), "Missing sessionId");
    assert_eq!(ProtocolError::InvalidSessionId.to_string(), "Invalid sessionId");
}
