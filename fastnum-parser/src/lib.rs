//! Fast base-10 number parsing for hot paths
//!
//! This parser trades generality for speed:
//! - Parses directly over a byte range, no substring allocation
//! - Power-of-ten scaling from tables built once per process
//! - No locale handling, whitespace trimming, NaN or Infinity
//!
//! Integers wrap silently on overflow, like the native `wrapping_*` arithmetic
//! of their fixed width.

pub mod error;
pub mod integer;
pub mod pow10;
pub mod scan;

mod double;
mod exponent;

pub use error::{ErrorKind, FormatError};
pub use integer::Integer;
pub use pow10::{Pow10Table, EXPONENT_TABLE_MAX, EXPONENT_TABLE_MIN, MAX_FRACTIONAL_DIGITS};
pub use scan::{scan_numbers, NumberScanner, ScannedField};

use std::ops::Range;

/// Parse a base-10 `i32` from the whole of `text`.
pub fn parse_int(text: &str) -> Result<i32, FormatError> {
    parse_integer(text)
}

/// Parse a base-10 `i32` from the half-open byte range `range` of `text`.
pub fn parse_int_range(text: &str, range: Range<usize>) -> Result<i32, FormatError> {
    parse_integer_range(text, range)
}

/// Parse a base-10 integer of any supported width from the whole of `text`.
pub fn parse_integer<T: Integer>(text: &str) -> Result<T, FormatError> {
    parse_integer_range(text, 0..text.len())
}

/// Parse a base-10 integer of any supported width from a byte range of `text`.
pub fn parse_integer_range<T: Integer>(text: &str, range: Range<usize>) -> Result<T, FormatError> {
    let input = resolve_range(text, range)?;
    integer::parse_signed(input.as_bytes()).map_err(|kind| kind.with_input(input))
}

/// Parse a double from the whole of `text`.
///
/// Accepts `['-'] digit* ['.' digit*] [('e'|'E') ['+'|'-'] digit+]` with at
/// least one mantissa digit.
pub fn parse_double(text: &str) -> Result<f64, FormatError> {
    parse_double_range(text, 0..text.len())
}

/// Parse a double from the half-open byte range `range` of `text`.
pub fn parse_double_range(text: &str, range: Range<usize>) -> Result<f64, FormatError> {
    let input = resolve_range(text, range)?;
    double::parse_double(input.as_bytes(), Pow10Table::global())
        .map_err(|kind| kind.with_input(input))
}

/// Borrow the requested range, rejecting empty, reversed, out-of-bounds and
/// non-char-boundary ranges.
fn resolve_range(text: &str, range: Range<usize>) -> Result<&str, FormatError> {
    let input = text
        .get(range.clone())
        .ok_or(FormatError::InvalidRange {
            start: range.start,
            end: range.end,
            len: text.len(),
        })?;
    if input.is_empty() {
        return Err(FormatError::Empty);
    }
    Ok(input)
}
