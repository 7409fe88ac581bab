//! Scientific-notation exponent handling

use crate::error::Fault;
use crate::integer::parse_digits;

/// Position of the first `e` or `E`, if any.
#[inline]
pub(crate) fn index_of_exponent_marker(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&c| c == b'e' || c == b'E')
}

/// Parse the bytes that follow an exponent marker: an optional `+` or `-`,
/// then one or more digits.
pub(crate) fn parse_exponent_after_e(bytes: &[u8]) -> Result<i32, Fault> {
    let (negative, digits) = match bytes.split_first() {
        None => return Err(Fault::MissingExponent),
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        Some(_) => (false, bytes),
    };
    if digits.is_empty() {
        return Err(Fault::MissingExponentDigits);
    }
    let exponent: i32 = parse_digits(digits)?;
    Ok(if negative {
        exponent.wrapping_neg()
    } else {
        exponent
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_search() {
        assert_eq!(index_of_exponent_marker(b"1.5e3"), Some(3));
        assert_eq!(index_of_exponent_marker(b"2E-3"), Some(1));
        assert_eq!(index_of_exponent_marker(b"1e2e3"), Some(1));
        assert_eq!(index_of_exponent_marker(b"1.5"), None);
        assert_eq!(index_of_exponent_marker(b""), None);
    }

    #[test]
    fn test_exponent_signs() {
        assert_eq!(parse_exponent_after_e(b"3"), Ok(3));
        assert_eq!(parse_exponent_after_e(b"+2"), Ok(2));
        assert_eq!(parse_exponent_after_e(b"-3"), Ok(-3));
        assert_eq!(parse_exponent_after_e(b"-0"), Ok(0));
    }

    #[test]
    fn test_exponent_errors() {
        assert_eq!(parse_exponent_after_e(b""), Err(Fault::MissingExponent));
        assert_eq!(
            parse_exponent_after_e(b"+"),
            Err(Fault::MissingExponentDigits)
        );
        assert_eq!(
            parse_exponent_after_e(b"-"),
            Err(Fault::MissingExponentDigits)
        );
        assert_eq!(parse_exponent_after_e(b"--5"), Err(Fault::NonNumeric));
        assert_eq!(parse_exponent_after_e(b"1.5"), Err(Fault::NonNumeric));
        assert_eq!(parse_exponent_after_e(b"3e2"), Err(Fault::NonNumeric));
    }
}
