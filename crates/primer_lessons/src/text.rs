//! String helpers.
//!
//! Character positions and lengths count Unicode scalar values (`char`s),
//! so `"héllo"` has length 5 and its second letter is `'é'`.

use primer_foundation::coerce::parse_int;
use primer_foundation::{Error, ErrorKind, Result};

/// Returns the first character of `input`.
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyInput`] if `input` is empty.
pub fn first_letter(input: &str) -> Result<char> {
    input
        .chars()
        .next()
        .ok_or_else(|| Error::empty_input("first_letter"))
}

/// Returns the character at `index`, counting from zero.
///
/// # Errors
///
/// Returns [`ErrorKind::IndexOutOfBounds`] if `input` has no character at
/// `index`.
pub fn nth_letter(input: &str, index: usize) -> Result<char> {
    input.chars().nth(index).ok_or_else(|| {
        Error::new(ErrorKind::IndexOutOfBounds {
            index,
            length: string_length(input),
        })
    })
}

/// Number of characters in `input`.
#[must_use]
pub fn string_length(input: &str) -> usize {
    input.chars().count()
}

/// Parses whitespace-separated integers.
///
/// Each token goes through [`parse_int`], so `"7up"` reads as 7. Tokens
/// with no leading digits stay in place as `None`.
///
/// ```
/// use primer_lessons::text::string_to_list;
///
/// assert_eq!(string_to_list("1 2 3"), vec![Some(1), Some(2), Some(3)]);
/// assert_eq!(string_to_list("4 x 6"), vec![Some(4), None, Some(6)]);
/// ```
#[must_use]
pub fn string_to_list(input: &str) -> Vec<Option<i64>> {
    input
        .split_whitespace()
        .map(|token| {
            let parsed = parse_int(token);
            if parsed.is_none() {
                tracing::trace!(token, "token has no leading integer");
            }
            parsed
        })
        .collect()
}
