//! `fastnum scan`: parse every delimited number in a file or stdin

use super::format_double;
use crate::config::{OutputConfig, ScanConfig};
use anyhow::{Context, Result};
use fastnum_parser::{scan_numbers, FormatError};
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("line {line}: {source}")]
    InvalidField {
        line: usize,
        #[source]
        source: FormatError,
    },
}

/// Running totals over the accepted fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSummary {
    pub count: usize,
    pub rejected: usize,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ScanSummary {
    fn record(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }
}

/// Read the scan input from `file`, or stdin when absent
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Print one parsed value per line to `out`.
///
/// Bad fields go to `err` when `skip_invalid` is set; otherwise the first one
/// ends the scan with a [`ScanError`].
pub fn scan<W: Write, E: Write>(
    source: &str,
    out: &mut W,
    err: &mut E,
    scan_config: &ScanConfig,
    output: &OutputConfig,
) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for field in scan_numbers(source) {
        match field.value {
            Ok(value) => {
                summary.record(value);
                writeln!(out, "{}", format_double(value, output.precision))?;
            }
            Err(error) if scan_config.skip_invalid => {
                summary.rejected += 1;
                debug!(line = field.line, "skipping invalid field");
                writeln!(err, "line {}: {}", field.line, error)?;
            }
            Err(error) => {
                return Err(ScanError::InvalidField {
                    line: field.line,
                    source: error,
                }
                .into());
            }
        }
    }

    debug!(
        "Scanned {} values, rejected {}",
        summary.count, summary.rejected
    );

    if scan_config.summary {
        write_summary(out, &summary, output)?;
    }
    Ok(summary)
}

fn write_summary<W: Write>(out: &mut W, summary: &ScanSummary, output: &OutputConfig) -> Result<()> {
    writeln!(out, "count: {}", summary.count)?;
    if summary.rejected > 0 {
        writeln!(out, "rejected: {}", summary.rejected)?;
    }
    writeln!(out, "sum: {}", format_double(summary.sum, output.precision))?;
    if let (Some(min), Some(max)) = (summary.min, summary.max) {
        writeln!(out, "min: {}", format_double(min, output.precision))?;
        writeln!(out, "max: {}", format_double(max, output.precision))?;
    }
    Ok(())
}
