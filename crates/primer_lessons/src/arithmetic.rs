//! Integer parsing and addition.
//!
//! Each operation comes in the shape the lesson uses it:
//!
//! - [`parse_and_add`] keeps the silent sentinel: a bad operand makes the
//!   whole sum `None` instead of failing.
//! - [`try_parse_and_add`] is the strict form and reports which operand
//!   was bad.
//! - [`add_ints`] takes numbers only; passing strings is a compile error.
//! - [`add_ints_coerced`] is the explicit opt-in to implicit coercion.

use primer_foundation::coerce::{parse_int, to_number};
use primer_foundation::{Error, Result, Value};

/// Parses the leading integer of each operand and adds them.
///
/// Returns `None` if either operand has no leading integer or the sum
/// overflows.
///
/// ```
/// use primer_lessons::arithmetic::parse_and_add;
///
/// assert_eq!(parse_and_add("3", "4"), Some(7));
/// assert_eq!(parse_and_add("abc", "4"), None);
/// ```
#[must_use]
pub fn parse_and_add(a: &str, b: &str) -> Option<i64> {
    let sum = parse_int(a)
        .zip(parse_int(b))
        .and_then(|(x, y)| x.checked_add(y));
    if sum.is_none() {
        tracing::trace!(a, b, "parse_and_add produced no number");
    }
    sum
}

/// Strict form of [`parse_and_add`].
///
/// # Errors
///
/// Returns `NotANumber` naming the first operand without a leading
/// integer, or `Overflow` if the sum does not fit in an `i64`.
pub fn try_parse_and_add(a: &str, b: &str) -> Result<i64> {
    let x = parse_int(a).ok_or_else(|| Error::not_a_number(a))?;
    let y = parse_int(b).ok_or_else(|| Error::not_a_number(b))?;
    x.checked_add(y).ok_or_else(|| Error::overflow("parse_and_add"))
}

/// Adds two integers, wrapping on overflow.
#[must_use]
pub const fn add_ints(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Adds two values after converting both with [`to_number`].
///
/// Numeric strings count as numbers, so `"1"` and `"2"` add up to `3`.
/// Anything that does not convert turns the result into `NaN`.
///
/// ```
/// use primer_foundation::Value;
/// use primer_lessons::arithmetic::add_ints_coerced;
///
/// assert_eq!(add_ints_coerced("1", "2"), Value::Int(3));
/// assert!(add_ints_coerced("one", 2i64).is_nan());
/// ```
#[must_use]
pub fn add_ints_coerced(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    let (a, b) = (a.into(), b.into());
    let sum = Value::number(to_number(&a) + to_number(&b));
    if sum.is_nan() {
        tracing::trace!(?a, ?b, "coerced addition produced NaN");
    }
    sum
}
