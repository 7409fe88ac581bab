//! `fastnum int` and `fastnum double`

use super::format_double;
use crate::config::OutputConfig;
use anyhow::Result;
use fastnum_parser::{parse_double_range, parse_int_range, parse_integer_range};
use std::io::Write;
use std::ops::Range;

/// Parse an integer and print it; `wide` selects `i64` over `i32`
pub fn int<W: Write>(out: &mut W, text: &str, range: Range<usize>, wide: bool) -> Result<()> {
    if wide {
        let value: i64 = parse_integer_range(text, range)?;
        writeln!(out, "{}", value)?;
    } else {
        let value = parse_int_range(text, range)?;
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

/// Parse a double and print it
pub fn double<W: Write>(
    out: &mut W,
    text: &str,
    range: Range<usize>,
    output: &OutputConfig,
) -> Result<()> {
    let value = parse_double_range(text, range)?;
    writeln!(out, "{}", format_double(value, output.precision))?;
    Ok(())
}
