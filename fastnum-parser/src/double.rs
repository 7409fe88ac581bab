//! Decimal mantissa parsing and the top-level double parser
//!
//! Digits are accumulated with plain `f64` multiply-add. This is fast but not
//! correctly rounded: long fractional parts can land one or two ulps away from
//! what `str::parse::<f64>` returns.

use crate::error::Fault;
use crate::exponent::{index_of_exponent_marker, parse_exponent_after_e};
use crate::pow10::Pow10Table;

/// Past this the fractional accumulator can no longer absorb another digit
/// exactly, and later digits are below its precision.
const FRACTION_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Parse `['-'] mantissa [('e'|'E') exponent]`.
pub(crate) fn parse_double(bytes: &[u8], table: &Pow10Table) -> Result<f64, Fault> {
    if bytes.is_empty() {
        return Err(Fault::Empty);
    }
    match index_of_exponent_marker(bytes) {
        None => parse_mantissa_only(bytes, table),
        Some(marker) => {
            let mantissa = parse_mantissa_only(&bytes[..marker], table)?;
            let exponent = parse_exponent_after_e(&bytes[marker + 1..])?;
            // 0 * inf is NaN; a zero mantissa stays zero, sign included
            if mantissa == 0.0 {
                return Ok(mantissa);
            }
            Ok(mantissa * table.power_of_10(exponent))
        }
    }
}

/// Parse a signed decimal with at most one `.` and no exponent marker.
///
/// At least one digit is required on either side of the point.
pub(crate) fn parse_mantissa_only(bytes: &[u8], table: &Pow10Table) -> Result<f64, Fault> {
    let (negative, body) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };

    let mut integer_part = 0.0;
    let mut fractional_part = 0.0;
    let mut fractional_digits = 0usize;
    let mut decimal: Option<usize> = None;
    let mut seen_digit = false;

    for (i, &c) in body.iter().enumerate() {
        match c {
            b'.' => {
                if decimal.is_some() {
                    return Err(Fault::SecondPeriod);
                }
                decimal = Some(i);
            }
            b'0'..=b'9' => {
                let digit = f64::from(c - b'0');
                seen_digit = true;
                if decimal.is_some() {
                    if fractional_part < FRACTION_LIMIT {
                        fractional_part = fractional_part * 10.0 + digit;
                        fractional_digits += 1;
                    }
                } else {
                    integer_part = integer_part * 10.0 + digit;
                }
            }
            _ => return Err(Fault::NonNumeric),
        }
    }

    if !seen_digit {
        return Err(Fault::MissingDigits);
    }

    if decimal.is_some() {
        fractional_part *= table.scale_for_fractional_digits(fractional_digits);
    }

    let value = integer_part + fractional_part;
    Ok(if negative { -value } else { value })
}
