//! Parser error types

use thiserror::Error;

/// The single error raised for malformed numeric input.
///
/// Every variant that carries a `String` holds the full range the caller asked
/// to parse, not just the character that tripped the scanner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Zero-length input")]
    Empty,

    #[error("Non-numeric character in input '{0}'")]
    NonNumeric(String),

    #[error("Second period in double for input '{0}'")]
    SecondPeriod(String),

    #[error("Exponent expected after 'e' in input '{0}'")]
    MissingExponent(String),

    #[error("Exponent digits expected in input '{0}'")]
    MissingExponentDigits(String),

    #[error("No digits in input '{0}'")]
    MissingDigits(String),

    #[error("Range {start}..{end} is not valid for input of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Empty,
    NonNumeric,
    SecondPeriod,
    MissingExponent,
    MissingExponentDigits,
    MissingDigits,
    InvalidRange,
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormatError::Empty => ErrorKind::Empty,
            FormatError::NonNumeric(_) => ErrorKind::NonNumeric,
            FormatError::SecondPeriod(_) => ErrorKind::SecondPeriod,
            FormatError::MissingExponent(_) => ErrorKind::MissingExponent,
            FormatError::MissingExponentDigits(_) => ErrorKind::MissingExponentDigits,
            FormatError::MissingDigits(_) => ErrorKind::MissingDigits,
            FormatError::InvalidRange { .. } => ErrorKind::InvalidRange,
        }
    }

    /// The input text quoted by the error, if any.
    pub fn input(&self) -> Option<&str> {
        match self {
            FormatError::NonNumeric(s)
            | FormatError::SecondPeriod(s)
            | FormatError::MissingExponent(s)
            | FormatError::MissingExponentDigits(s)
            | FormatError::MissingDigits(s) => Some(s),
            FormatError::Empty | FormatError::InvalidRange { .. } => None,
        }
    }
}

/// Failure reported by the inner scanners, before the parsed range is known.
///
/// Range validation happens before any scanner runs, so there is no
/// `InvalidRange` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fault {
    Empty,
    NonNumeric,
    SecondPeriod,
    MissingExponent,
    MissingExponentDigits,
    MissingDigits,
}

impl Fault {
    /// Attach the full parsed range to the fault.
    pub(crate) fn with_input(self, input: &str) -> FormatError {
        match self {
            Fault::Empty => FormatError::Empty,
            Fault::NonNumeric => FormatError::NonNumeric(input.to_string()),
            Fault::SecondPeriod => FormatError::SecondPeriod(input.to_string()),
            Fault::MissingExponent => FormatError::MissingExponent(input.to_string()),
            Fault::MissingExponentDigits => FormatError::MissingExponentDigits(input.to_string()),
            Fault::MissingDigits => FormatError::MissingDigits(input.to_string()),
        }
    }
}
