//! Field scanner for delimited numeric text using logos
//!
//! Splits a buffer into fields separated by whitespace, `,` or `;` and parses
//! each one in place with [`parse_double_range`](crate::parse_double_range).

use crate::error::FormatError;
use logos::{Lexer as LogosLexer, Logos};
use std::ops::Range;
use tracing::trace;

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r,;]+")]
enum Token {
    #[token("\n")]
    Newline,

    #[regex(r"[^ \t\r\n,;]+")]
    Field,
}

/// One field of the scanned buffer
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedField {
    /// 1-based line number
    pub line: usize,
    /// Byte span of the field in the source
    pub span: Range<usize>,
    pub value: Result<f64, FormatError>,
}

impl ScannedField {
    /// The field's text within `source`; `None` if the span does not fit it
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.span.clone())
    }
}

/// Iterator over the numeric fields of a buffer
pub struct NumberScanner<'a> {
    source: &'a str,
    inner: LogosLexer<'a, Token>,
    line: usize,
}

impl<'a> NumberScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            line: 1,
        }
    }

    /// Line the scanner is currently on
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<'a> Iterator for NumberScanner<'a> {
    type Item = ScannedField;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(Token::Newline) => self.line += 1,
                Ok(Token::Field) => {
                    let span = self.inner.span();
                    let value = crate::parse_double_range(self.source, span.clone());
                    if let Err(err) = &value {
                        trace!(line = self.line, ?span, %err, "rejected field");
                    }
                    return Some(ScannedField {
                        line: self.line,
                        span,
                        value,
                    });
                }
                // every byte is a field, a delimiter or a newline
                Err(()) => continue,
            }
        }
    }
}

/// Scan `source` for delimited numbers
pub fn scan_numbers(source: &str) -> NumberScanner<'_> {
    NumberScanner::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_scan_single_line() {
        let source = "1, 2.5;-3e2\t.5";
        let values: Vec<f64> = scan_numbers(source)
            .map(|field| field.value.unwrap())
            .collect();
        assert_eq!(values, vec![1.0, 2.5, -300.0, 0.5]);
    }

    #[test]
    fn test_scan_tracks_lines_and_spans() {
        let source = "10 20\r\n\n30";
        let fields: Vec<ScannedField> = scan_numbers(source).collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].line, 1);
        assert_eq!(fields[1].line, 1);
        assert_eq!(fields[2].line, 3);
        assert_eq!(fields[1].span, 3..5);
        assert_eq!(fields[2].text(source), Some("30"));
        assert_eq!(fields[2].text("short"), None);
    }

    #[test]
    fn test_scan_reports_bad_fields() {
        let source = "1.2.3 abc 4";
        let kinds: Vec<Result<f64, ErrorKind>> = scan_numbers(source)
            .map(|field| field.value.map_err(|e| e.kind()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                Err(ErrorKind::SecondPeriod),
                Err(ErrorKind::NonNumeric),
                Ok(4.0)
            ]
        );
    }

    #[test]
    fn test_scan_empty_and_blank() {
        assert_eq!(scan_numbers("").count(), 0);
        let mut scanner = scan_numbers(" ,;\n\n");
        assert!(scanner.next().is_none());
        assert_eq!(scanner.line(), 3);
    }
}
