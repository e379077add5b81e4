//! Integration tests for Binding
//!
//! Declared types are checked when a binding is created.

use primer_foundation::{Binding, ErrorKind, Type, Value};

#[test]
fn matching_declarations_bind() {
    assert!(Binding::new("name", Type::String, "Sam").is_ok());
    assert!(Binding::new("count", Type::Int, 3i64).is_ok());
    assert!(Binding::new("ready", Type::Bool, true).is_ok());
    assert!(Binding::new("nothing", Type::Nil, Value::Nil).is_ok());
    assert!(Binding::new("instance", Type::Opaque("MyClass"), Value::Opaque("MyClass")).is_ok());
}

#[test]
fn homogeneous_list_rejects_stray_element() {
    let values = vec![Value::Int(1), Value::Int(2), Value::from("3")];
    let err = Binding::new("numbers", Type::vec(Type::Int), values).unwrap_err();
    match err.kind {
        ErrorKind::TypeMismatch { expected, actual } => {
            assert_eq!(expected, Type::vec(Type::Int));
            assert_eq!(actual, Type::vec(Type::Any));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn loosely_typed_list_accepts_anything() {
    let values = vec![Value::Nil, Value::Int(1), Value::from("x"), Value::from(vec![true])];
    let binding = Binding::new("stuff", Type::vec(Type::Any), values).unwrap();
    assert_eq!(binding.value().to_string(), "[nil 1 x [true]]");
}

#[test]
fn error_message_names_types_and_binding() {
    let err = Binding::new("flag", Type::Bool, "yes").unwrap_err();
    assert_eq!(err.to_string(), "type mismatch: expected bool, got string");
    assert_eq!(err.context.and_then(|c| c.source).as_deref(), Some("flag"));
}

#[test]
fn opaque_binding_rejects_other_nominal_type() {
    let err = Binding::new("config", Type::Opaque("ApiConfig"), Value::Opaque("AwsConfig"))
        .unwrap_err();
    assert_eq!(err.to_string(), "type mismatch: expected ApiConfig, got AwsConfig");
}
