//! The lesson's declared bindings.
//!
//! Statically typed bindings are plain constants and constructors. The
//! loosely typed ones are exposed through [`declared`] as checked
//! [`Binding`]s so their annotations can be listed and verified.

use primer_foundation::{Binding, Result, Type, Value};

use crate::records::{BuildProfile, ClassInfo, MyClass, Person};
use crate::sequence::filter_and_square;

/// The first thing the lesson prints.
pub const GREETING: &str = "Hello world!";

/// The numbers 1 through 5.
pub const NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Whether we are learning.
pub const IS_LEARNING: bool = true;

/// A single number.
pub const LUCKY_NUMBER: i64 = 7;

/// A single word.
pub const WORD: &str = "hey";

/// An instance of the data-less [`MyClass`].
pub const MY_INSTANCE: MyClass = MyClass;

/// Squares of the even entries of [`NUMBERS`]: `[4, 16]`.
#[must_use]
pub fn even_squares() -> Vec<i64> {
    filter_and_square(&NUMBERS)
}

/// A list that mixes strings, numbers, and booleans.
#[must_use]
pub fn mixed_list() -> Vec<Value> {
    vec![
        Value::from("apple"),
        Value::Int(42),
        Value::Bool(false),
        Value::Float(2.5),
    ]
}

/// A fully populated class record.
#[must_use]
pub fn sample_class() -> ClassInfo {
    ClassInfo::new("Computer Science", "Dr. Rivera")
}

/// A person record.
#[must_use]
pub fn sample_person() -> Person {
    Person::new("Sam", 29)
}

/// The release build profile.
#[must_use]
pub fn release_profile() -> BuildProfile {
    BuildProfile {
        profile: "release".to_string(),
        optimization_level: 3,
    }
}

/// Every loosely typed binding with its declared type, in declaration order.
///
/// # Errors
///
/// Returns a type mismatch if a binding no longer matches its annotation.
pub fn declared() -> Result<Vec<Binding>> {
    Ok(vec![
        Binding::new("greeting", Type::String, GREETING)?,
        Binding::new("numbers", Type::vec(Type::Int), NUMBERS.to_vec())?,
        Binding::new("evenSquares", Type::vec(Type::Int), even_squares())?,
        Binding::new("isLearning", Type::Bool, IS_LEARNING)?,
        Binding::new("luckyNumber", Type::Int, LUCKY_NUMBER)?,
        Binding::new("word", Type::String, WORD)?,
        Binding::new("stuff", Type::vec(Type::Any), mixed_list())?,
        Binding::new("myInstance", MyClass::TYPE, MY_INSTANCE)?,
    ])
}
