//! Integration tests for records and opaque types
//!
//! The three misuses these types forbid are covered by `compile_fail`
//! doctests in `primer_lessons::records`.

use primer_lessons::bindings::{release_profile, sample_class, sample_person};
use primer_lessons::{
    ApiConfig, AwsConfig, BuildProfile, ClassInfo, MyClass, Person, add_class, get_person_id,
    print_name,
};

#[test]
fn add_class_with_complete_record() {
    assert_eq!(
        add_class(&sample_class()),
        "Computer Science taught by Dr. Rivera"
    );
}

#[test]
fn print_name_reads_name_field() {
    let mut out: Vec<u8> = Vec::new();
    print_name(&sample_person(), &mut out).unwrap();
    assert_eq!(out, b"Sam\n");
}

#[test]
fn get_person_id_takes_api_config() {
    assert_eq!(get_person_id(&ApiConfig), None);
}

#[test]
fn marker_types_carry_no_data() {
    assert_eq!(std::mem::size_of::<MyClass>(), 0);
    assert_eq!(std::mem::size_of::<ApiConfig>(), 0);
    assert_eq!(std::mem::size_of::<AwsConfig>(), 0);
    assert_ne!(ApiConfig::TYPE, AwsConfig::TYPE);
}

#[test]
fn class_info_json_uses_declared_field_names() {
    let class: ClassInfo =
        serde_json::from_str(r#"{"className":"Biology","professorName":"Dr. Osei"}"#).unwrap();
    assert_eq!(class, ClassInfo::new("Biology", "Dr. Osei"));
}

#[test]
fn class_info_json_missing_professor_fails() {
    let result = serde_json::from_str::<ClassInfo>(r#"{"className":"Biology"}"#);
    assert!(result.is_err());
}

#[test]
fn person_json_with_misspelled_name_fails() {
    let result = serde_json::from_str::<Person>(r#"{"nam":"Sam","age":29}"#);
    assert!(result.is_err());
}

#[test]
fn build_profile_json_round_trip() {
    let json = serde_json::to_string(&release_profile()).unwrap();
    assert_eq!(json, r#"{"profile":"release","optimizationLevel":3}"#);
    let back: BuildProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, release_profile());
}
