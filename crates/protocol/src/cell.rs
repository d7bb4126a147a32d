//! CSV cell rendering
//!
//! Client fields arrive as arbitrary JSON. Each one is flattened to the text
//! that lands in its CSV cell.

use serde_json::Value;

/// Render an optional JSON value as CSV cell text
///
/// | JSON | Cell |
/// |------|------|
/// | absent / `null` | empty |
/// | `"abc"` | `abc` |
/// | `5`, `2.5` | `5`, `2.5` |
/// | integer outside `i64`/`u64` | shortest `f64` text, e.g. `1.8446744073709552e19` |
/// | `true` / `false` | `True` / `False` |
/// | array / object | compact JSON |
///
/// Integers beyond 64 bits are parsed as `f64`, so their low digits are not
/// preserved. Game payloads carry millisecond timestamps and small counters,
/// well inside `u64`.
///
/// # Example
///
/// ```
/// use cointrail_protocol::cell;
/// use serde_json::json;
///
/// assert_eq!(cell(Some(&json!(5))), "5");
/// assert_eq!(cell(None), "");
/// ```
pub fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(other) => other.to_string(),
    }
}
