//! Numeric parsing and implicit coercion rules.
//!
//! Two rules live here and they differ on purpose:
//!
//! - [`parse_int`] reads the *leading* integer of a string and ignores
//!   whatever follows (`"12px"` is 12).
//! - [`to_number`] converts a *whole* value and yields `NaN` unless the
//!   entire trimmed string is numeric (`"12px"` is `NaN`).

use crate::value::Value;

/// Parses the leading base-10 integer of `input`.
///
/// Leading whitespace is skipped, then an optional `+` or `-`, then the
/// longest run of ASCII digits. Anything after the digits is ignored.
///
/// Returns `None`, the not-a-number sentinel, when there are no digits or
/// the digit run does not fit in an `i64`.
#[must_use]
pub fn parse_int(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let unsigned = rest.strip_prefix(['+', '-']).unwrap_or(rest);
    let sign_len = rest.len() - unsigned.len();
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    if digits == 0 {
        return None;
    }

    // Sign and digits are ASCII, so byte offsets are char boundaries.
    rest[..sign_len + digits].parse().ok()
}

/// Converts a value to a number the way the lesson's `+` operator does.
///
/// | Input | Result |
/// |---|---|
/// | nil | `NaN` |
/// | `true` / `false` | `1` / `0` |
/// | int, float | unchanged |
/// | blank string | `0` |
/// | numeric string (decimal, exponent, `0x`/`0o`/`0b`, `Infinity`) | its value |
/// | any other string, any sequence, any opaque instance | `NaN` |
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Nil | Value::Vec(_) | Value::Opaque(_) => f64::NAN,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Int(n) => *n as f64,
        Value::Float(n) => *n,
        Value::String(s) => string_to_number(s),
    }
}

#[allow(clippy::cast_precision_loss)]
fn string_to_number(input: &str) -> f64 {
    let s = input.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }

    // Rust's float parser also takes "inf" and "nan"; restrict it to
    // plain decimal literals first.
    let decimal_only = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal_only {
        return f64::NAN;
    }

    s.parse().unwrap_or(f64::NAN)
}
