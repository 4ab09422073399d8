//! Helpers for turning puzzle input text into values, keeping enough context for useful errors.

use std::str::FromStr;

use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// Parsing a string with [`FromStr`] failed; keeps the offending string for the message.
#[derive(Error, Debug)]
#[error("failed to parse {text:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    text: String,
    source: E,
}

/// Like [`str::parse`], but the error remembers what was being parsed.
///
/// # Errors
///
/// Returns a [`ParseContextError`] wrapping [`FromStr::Err`] when `text` is not a valid `F`.
pub fn parse_with_context<F>(text: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    text.parse().map_err(|source| ParseContextError {
        text: text.to_owned(),
        source,
    })
}

/// A line of input could not be handled.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// Zero based; displayed one based.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    /// The zero-based index of the line that failed.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.line_index
    }
}

/// Map every input line through `parser`, which receives the zero-based line index and the line.
///
/// Errors from `parser` are wrapped in [`InvalidLine`] with the line's index.
pub fn parse_input_lines<T, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(usize, &str) -> DynamicResult<T>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|source| InvalidLine { line_index, source })
    })
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn parse_with_context_reports_text() {
        let Err(error) = parse_with_context::<u8>("300") else {
            panic!("300 should not fit in u8");
        };
        assert_eq!(error.to_string(), "failed to parse \"300\"");
        assert!(error.source().is_some());
    }

    #[test]
    fn parse_input_lines_passes_index() -> DynamicResult<()> {
        let pairs: Vec<(usize, usize)> = parse_input_lines("a\nbb\nccc", |index, line| {
            Ok((index, line.len()))
        })
        .collect::<Result<_, _>>()?;
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
        Ok(())
    }

    #[test]
    fn parse_input_lines_reports_one_based_line() {
        let result = parse_input_lines("1\nx\n3", |_, line| Ok(parse_with_context::<u8>(line)?))
            .collect::<Result<Vec<_>, _>>();
        let Err(error) = result else {
            panic!("second line should fail to parse");
        };
        assert_eq!(error.line_index(), 1);
        assert_eq!(error.to_string(), "failure parsing line 2");
    }
}
