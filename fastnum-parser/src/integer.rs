//! Base-10 integer accumulation

use crate::error::Fault;

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width signed integers the parser can produce.
///
/// Accumulation wraps on overflow in two's complement, the same as the native
/// `wrapping_*` operations of the underlying type.
pub trait Integer: sealed::Sealed + Copy + Default {
    /// `self * 10 + digit`, wrapping
    fn push_digit(self, digit: u8) -> Self;

    /// `-self`, wrapping
    fn negate(self) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Integer for $ty {
                #[inline]
                fn push_digit(self, digit: u8) -> Self {
                    self.wrapping_mul(10).wrapping_add(<$ty>::from(digit))
                }

                #[inline]
                fn negate(self) -> Self {
                    self.wrapping_neg()
                }
            }
        )*
    };
}

impl_integer!(i32, i64);

/// Parse an optional leading `-` followed by one or more ASCII digits.
pub(crate) fn parse_signed<T: Integer>(bytes: &[u8]) -> Result<T, Fault> {
    let (negative, digits) = match bytes.split_first() {
        None => return Err(Fault::Empty),
        Some((b'-', rest)) => (true, rest),
        Some(_) => (false, bytes),
    };
    let value: T = parse_digits(digits)?;
    Ok(if negative { value.negate() } else { value })
}

/// Parse a run of ASCII digits with no sign.
pub(crate) fn parse_digits<T: Integer>(digits: &[u8]) -> Result<T, Fault> {
    if digits.is_empty() {
        return Err(Fault::MissingDigits);
    }
    let mut output = T::default();
    for &c in digits {
        if !c.is_ascii_digit() {
            return Err(Fault::NonNumeric);
        }
        output = output.push_digit(c - b'0');
    }
    Ok(output)
}
