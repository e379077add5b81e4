//! Integration tests for numeric parsing and coercion
//!
//! `parse_int` reads a leading integer; `to_number` converts a whole value.

use primer_foundation::Value;
use primer_foundation::coerce::{parse_int, to_number};

#[test]
fn parse_int_and_to_number_disagree_on_trailing_text() {
    assert_eq!(parse_int("42abc"), Some(42));
    assert!(to_number(&Value::from("42abc")).is_nan());
}

#[test]
fn both_agree_on_plain_integers() {
    for input in ["0", "7", "-15", "  8"] {
        let parsed = parse_int(input).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let parsed = parsed as f64;
        assert!((to_number(&Value::from(input)) - parsed).abs() < f64::EPSILON);
    }
}

#[test]
fn blank_strings() {
    assert_eq!(parse_int("   "), None);
    assert!(to_number(&Value::from("   ")).abs() < f64::EPSILON);
}
