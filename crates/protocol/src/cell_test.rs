//! Tests for CSV cell rendering

use serde_json::json;

use crate::cell;

#[test]
fn test_cell_absent_and_null_are_empty() {
    assert_eq!(cell(None), "");
    assert_eq!(cell(Some(&json!(null))), "");
}

#[test]
fn test_cell_string_passes_through() {
    assert_eq!(cell(Some(&json!("gold"))), "gold");
    assert_eq!(cell(Some(&json!(""))), "");
}

#[test]
fn test_cell_numbers_keep_their_form() {
    assert_eq!(cell(Some(&json!(5))), "5");
    assert_eq!(cell(Some(&json!(-3))), "-3");
    assert_eq!(cell(Some(&json!(2.5))), "2.5");
    assert_eq!(cell(Some(&json!(1736939445123_u64))), "1736939445123");
}

#[test]
fn test_cell_integer_edges() {
    assert_eq!(cell(Some(&json!(u64::MAX))), "18446744073709551615");
    assert_eq!(cell(Some(&json!(i64::MIN))), "-9223372036854775808");

    // One past u64::MAX falls back to f64
    let huge: serde_json::Value = serde_json::from_str("18446744073709551616").unwrap();
    let text = cell(Some(&huge));
    assert_ne!(text, "18446744073709551616");
    assert_eq!(text.parse::<f64>().unwrap(), 1.8446744073709552e19_f64);
}

#[test]
fn test_cell_booleans() {
    assert_eq!(cell(Some(&json!(true))), "True");
    assert_eq!(cell(Some(&json!(false))), "False");
}

#[test]
fn test_cell_nested_values_are_compact_json() {
    assert_eq!(cell(Some(&json!([1, 2]))), "[1,2]");
    assert_eq!(cell(Some(&json!({"a": 1}))), r#"{"a":1}"#);
}
