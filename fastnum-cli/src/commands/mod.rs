//! Command implementations for the fastnum CLI

pub mod parse;
pub mod scan;

use std::ops::Range;

/// Resolve optional `--start`/`--end` flags against the text length
pub fn range_of(text: &str, start: Option<usize>, end: Option<usize>) -> Range<usize> {
    start.unwrap_or(0)..end.unwrap_or(text.len())
}

/// Render a double with an optional fixed number of decimal places
pub fn format_double(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(places) => format!("{:.*}", places, value),
        None => format!("{}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_of() {
        assert_eq!(range_of("abc123", None, None), 0..6);
        assert_eq!(range_of("abc123", Some(3), None), 3..6);
        assert_eq!(range_of("abc123", Some(1), Some(2)), 1..2);
    }

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(1500.0, None), "1500");
        assert_eq!(format_double(0.002, None), "0.002");
        assert_eq!(format_double(2.0 / 3.0, Some(3)), "0.667");
    }
}
