//! Sequence helpers: filter/map pipelines and ranges.

use std::io::{self, Write};

/// Squares every even element, dropping the odd ones.
///
/// Relative order is preserved and an empty input gives an empty output.
/// Squares that leave the `i64` range wrap, like [`add_one`].
///
/// ```
/// use primer_lessons::sequence::filter_and_square;
///
/// assert_eq!(filter_and_square(&[1, 2, 3, 4, 5]), vec![4, 16]);
/// ```
#[must_use]
pub fn filter_and_square(numbers: &[i64]) -> Vec<i64> {
    numbers
        .iter()
        .filter(|n| *n % 2 == 0)
        .map(|n| n.wrapping_mul(*n))
        .collect()
}

/// Returns `n + 1`, wrapping at `i64::MAX`.
#[must_use]
pub const fn add_one(n: i64) -> i64 {
    n.wrapping_add(1)
}

/// Writes every integer in `start..=stop` on its own line.
///
/// Nothing is written when `start > stop`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn print_range<W: Write + ?Sized>(start: i64, stop: i64, out: &mut W) -> io::Result<()> {
    for n in start..=stop {
        writeln!(out, "{n}")?;
    }
    Ok(())
}
