//! Integration tests for parsing and addition

use primer_foundation::{ErrorKind, Value};
use primer_lessons::{add_ints, add_ints_coerced, parse_and_add, try_parse_and_add};

#[test]
fn parse_and_add_three_and_four() {
    assert_eq!(parse_and_add("3", "4"), Some(7));
}

#[test]
fn parse_and_add_with_bad_operand_yields_sentinel() {
    assert_eq!(parse_and_add("abc", "4"), None);
    assert!(Value::from(parse_and_add("abc", "4")).is_nan());
}

#[test]
fn strict_form_reports_first_bad_operand() {
    let err = try_parse_and_add("x", "y").unwrap_err();
    match err.kind {
        ErrorKind::NotANumber { input } => assert_eq!(input, "x"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn typed_and_coerced_addition_agree_on_numeric_strings() {
    assert_eq!(add_ints(1, 2), 3);
    assert_eq!(add_ints_coerced("1", "2"), Value::Int(3));
    assert_eq!(add_ints_coerced("1", "2").to_string(), "3");
}

#[test]
fn coerced_addition_mixes_types() {
    assert_eq!(add_ints_coerced(1i64, "0x0F"), Value::Int(16));
    assert_eq!(add_ints_coerced(0.5, "0.25"), Value::Float(0.75));
}
