//! Lesson helpers for Primer.
//!
//! This crate provides small, single-purpose functions organized by topic:
//! - [`sequence`] - filtering, mapping, and ranges
//! - [`text`] - character extraction, length, and integer lists
//! - [`arithmetic`] - integer parsing and addition, strict and coerced
//! - [`records`] - fixed-shape records and opaque marker types
//! - [`bindings`] - the lesson's declared values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod bindings;
pub mod records;
pub mod sequence;
pub mod text;

pub use arithmetic::{add_ints, add_ints_coerced, parse_and_add, try_parse_and_add};
pub use records::{
    ApiConfig, AwsConfig, BuildProfile, ClassInfo, MyClass, Person, PersonId, add_class,
    get_person_id, print_name,
};
pub use sequence::{add_one, filter_and_square, print_range};
pub use text::{first_letter, nth_letter, string_length, string_to_list};
