//! Integration tests for string helpers

use primer_foundation::ErrorKind;
use primer_lessons::{first_letter, nth_letter, string_length, string_to_list};

#[test]
fn first_letter_of_hey() {
    assert_eq!(first_letter("hey").unwrap(), 'h');
}

#[test]
fn first_letter_of_empty_reports_empty_input() {
    let err = first_letter("").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyInput { .. }));
    assert_eq!(err.to_string(), "first_letter: empty input");
}

#[test]
fn nth_letter_counts_characters() {
    assert_eq!(nth_letter("naïve", 2).unwrap(), 'ï');
    assert_eq!(nth_letter("naïve", 3).unwrap(), 'v');
    assert!(nth_letter("", 0).is_err());
}

#[test]
fn string_length_of_multibyte_text() {
    assert_eq!(string_length("naïve"), 5);
    assert_eq!(string_length("日本"), 2);
}

#[test]
fn string_to_list_of_one_two_three() {
    assert_eq!(string_to_list("1 2 3"), vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn string_to_list_keeps_sentinels_in_position() {
    assert_eq!(
        string_to_list("5 five -5 +5"),
        vec![Some(5), None, Some(-5), Some(5)]
    );
}
