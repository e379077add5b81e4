//! Integration tests for Value
//!
//! Tests construction, typing, display, and numeric normalization.

use primer_foundation::{Seq, Type, Value};

// =============================================================================
// Construction and Typing
// =============================================================================

#[test]
fn scalars_report_their_type() {
    assert_eq!(Value::Nil.value_type(), Type::Nil);
    assert_eq!(Value::Bool(true).value_type(), Type::Bool);
    assert_eq!(Value::Int(1).value_type(), Type::Int);
    assert_eq!(Value::Float(1.5).value_type(), Type::Float);
    assert_eq!(Value::from("x").value_type(), Type::String);
}

#[test]
fn homogeneous_sequence_type() {
    let v = Value::from(vec!["a", "b"]);
    assert_eq!(v.value_type(), Type::vec(Type::String));
}

#[test]
fn nested_sequence_type() {
    let v = Value::from(vec![vec![1i64, 2], vec![3i64]]);
    assert_eq!(v.value_type(), Type::vec(Type::vec(Type::Int)));
}

#[test]
fn opaque_instance_type_is_its_name() {
    assert_eq!(Value::Opaque("MyClass").value_type(), Type::Opaque("MyClass"));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_of_numbers() {
    assert_eq!(Value::number(4.0).to_string(), "4");
    assert_eq!(Value::number(0.5).to_string(), "0.5");
    assert_eq!(Value::NAN.to_string(), "NaN");
    assert_eq!(Value::number(f64::INFINITY).to_string(), "Infinity");
}

#[test]
fn display_of_sequences() {
    let v = Value::Vec(vec![Value::from("apple"), Value::Int(42), Value::Bool(false)].into());
    assert_eq!(v.to_string(), "[apple 42 false]");
    assert_eq!(format!("{v:?}"), "[\"apple\", 42, false]");
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn cloned_sequences_stay_equal() {
    let base: Seq<Value> = vec![Value::Int(1), Value::from("two")].into();
    let copy = Value::Vec(base.clone());
    assert_eq!(copy, Value::Vec(base));
    assert_eq!(copy.to_string(), "[1 two]");
}
