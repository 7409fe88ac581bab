//! Power-of-ten lookup tables
//!
//! Scaling a mantissa by its exponent or a fractional part by its digit count
//! would otherwise need a `powf` call per literal. Small exponents and short
//! fractions dominate real input, so both are served from two fixed tables
//! built once per process. Anything outside the tables falls back to `powf`.

use once_cell::sync::Lazy;
use tracing::{debug, trace};

/// Smallest exponent served from the table.
pub const EXPONENT_TABLE_MIN: i32 = -10;
/// Largest exponent served from the table.
pub const EXPONENT_TABLE_MAX: i32 = 10;
/// Longest fractional part served from the inverse table.
pub const MAX_FRACTIONAL_DIGITS: usize = 10;

const EXPONENT_TABLE_LEN: usize = (EXPONENT_TABLE_MAX - EXPONENT_TABLE_MIN + 1) as usize;

/// Process-wide table instance
static POW10: Lazy<Pow10Table> = Lazy::new(Pow10Table::new);

/// Immutable powers of ten.
#[derive(Debug, Clone)]
pub struct Pow10Table {
    /// `by_exponent[i] == 10^(EXPONENT_TABLE_MIN + i)`
    by_exponent: [f64; EXPONENT_TABLE_LEN],
    /// `inverse[d] == 10^-d`; slot 0 is unused
    inverse: [f64; MAX_FRACTIONAL_DIGITS + 1],
}

impl Pow10Table {
    /// Build both tables.
    ///
    /// Every positive power up to `10^22` is exact in an `f64`, so entries are
    /// produced by multiplication and a single correctly rounded division.
    pub fn new() -> Self {
        let mut by_exponent = [0.0; EXPONENT_TABLE_LEN];
        for (i, slot) in by_exponent.iter_mut().enumerate() {
            let exponent = EXPONENT_TABLE_MIN + i as i32;
            let magnitude = exact_power_of_10(exponent.unsigned_abs());
            *slot = if exponent < 0 { 1.0 / magnitude } else { magnitude };
        }

        let mut inverse = [0.0; MAX_FRACTIONAL_DIGITS + 1];
        for (d, slot) in inverse.iter_mut().enumerate().skip(1) {
            *slot = 1.0 / exact_power_of_10(d as u32);
        }

        debug!(
            "Built power-of-ten tables: exponents {}..={}, fractional digits 1..={}",
            EXPONENT_TABLE_MIN, EXPONENT_TABLE_MAX, MAX_FRACTIONAL_DIGITS
        );

        Self {
            by_exponent,
            inverse,
        }
    }

    /// The shared instance, built on first use
    pub fn global() -> &'static Pow10Table {
        &POW10
    }

    /// Returns `10^exponent`.
    pub fn power_of_10(&self, exponent: i32) -> f64 {
        if (EXPONENT_TABLE_MIN..=EXPONENT_TABLE_MAX).contains(&exponent) {
            return self.by_exponent[(exponent - EXPONENT_TABLE_MIN) as usize];
        }
        trace!(exponent, "power_of_10 outside table");
        10f64.powf(f64::from(exponent))
    }

    /// Returns `10^-digit_count`, the factor that turns an accumulated fractional
    /// part back into its place value.
    pub fn scale_for_fractional_digits(&self, digit_count: usize) -> f64 {
        if (1..=MAX_FRACTIONAL_DIGITS).contains(&digit_count) {
            return self.inverse[digit_count];
        }
        trace!(digit_count, "fractional scale outside table");
        10f64.powf(-(digit_count as f64))
    }
}

/// `10^n` by repeated multiplication; exact while `n <= 22`.
fn exact_power_of_10(n: u32) -> f64 {
    (0..n).fold(1.0, |acc, _| acc * 10.0)
}

impl Default for Pow10Table {
    fn default() -> Self {
        Self::new()
    }
}
