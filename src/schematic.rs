//! Streaming scan of an engine schematic: a grid of digits, empty markers, and symbols.
//!
//! A number in the grid is a [`Token`], a maximal run of ASCII digits. Any character that is
//! neither a digit nor the empty marker is a symbol, and the gear marker is a symbol that may
//! pair two numbers. A token spanning columns `start..end` is adjacent to a symbol on the same or
//! a vertically neighbouring line when the symbol's column is within `start - 1..=end`.
//!
//! The grid is consumed one line at a time. Only a bounded [`LineWindow`] of recent lines is kept,
//! so input can be streamed from any line source.

use thiserror::Error;

mod scanner;
mod window;

pub use scanner::{GearScanner, PartNumberScanner, sum_of_adjacent_values, sum_of_gear_ratios};
pub use window::LineWindow;

/// Integer type for numbers in the schematic and the sums built from them.
pub type TokenValue = u64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchematicError {
    /// A digit run is too long to hold in [`TokenValue`].
    #[error("number starting at line {}, column {} does not fit in {} bits",
        .line_index.saturating_add(1), .column.saturating_add(1), TokenValue::BITS)]
    TokenOverflow { line_index: usize, column: usize },

    /// The running sum of part numbers overflowed.
    #[error("integer overflow while summing part numbers at line {}", .line_index.saturating_add(1))]
    SumOverflow { line_index: usize },

    /// A gear ratio, or the running sum of gear ratios, overflowed.
    #[error("integer overflow from gear at line {}, column {}",
        .line_index.saturating_add(1), .column.saturating_add(1))]
    RatioOverflow { line_index: usize, column: usize },
}

/// The characters with special meaning in a schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    /// Background of the grid; neither a number nor a symbol.
    pub empty: char,
    /// The symbol that may join exactly two numbers as a gear.
    pub gear: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            empty: '.',
            gear: '*',
        }
    }
}

impl Markers {
    /// Whether a character is a symbol, decided by the character alone.
    #[must_use]
    pub fn is_symbol(&self, character: char) -> bool {
        !character.is_ascii_digit() && character != self.empty
    }

    #[must_use]
    pub fn is_gear(&self, character: char) -> bool {
        character == self.gear && self.is_symbol(character)
    }
}

/// A number in a line of the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub value: TokenValue,
    /// Column of the first digit.
    pub start: usize,
    /// Column after the last digit.
    pub end: usize,
}

impl Token {
    /// Whether a symbol at `column`, on this line or a neighbouring one, touches this token.
    #[must_use]
    pub fn is_adjacent_to(&self, column: usize) -> bool {
        (self.start.saturating_sub(1)..=self.end).contains(&column)
    }

    /// The identity of this token when it sits on line `line_index`.
    #[must_use]
    pub fn id(&self, line_index: usize) -> TokenId {
        TokenId {
            line_index,
            start: self.start,
            value: self.value,
        }
    }
}

/// Identifies one physical token in the grid, used to count it at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId {
    pub line_index: usize,
    pub start: usize,
    pub value: TokenValue,
}

/// A digit run starting at `column` does not fit in [`TokenValue`].
#[derive(Error, Debug, PartialEq, Eq)]
#[error("number starting at column {column} overflows")]
pub struct TokenOverflow {
    pub column: usize,
}

/// Collect the tokens of a line, left to right.
///
/// # Errors
///
/// Returns [`TokenOverflow`] for a digit run too large for [`TokenValue`].
pub fn extract_tokens(line: &str) -> Result<Vec<Token>, TokenOverflow> {
    let mut tokens = Vec::new();
    let mut pending: Option<Token> = None;

    for (column, character) in line.chars().enumerate() {
        let Some(digit) = character.to_digit(10) else {
            tokens.extend(pending.take());
            continue;
        };

        if let Some(token) = pending.as_mut() {
            token.value = token
                .value
                .checked_mul(10)
                .and_then(|value| value.checked_add(TokenValue::from(digit)))
                .ok_or(TokenOverflow {
                    column: token.start,
                })?;
            token.end = column + 1;
        } else {
            pending = Some(Token {
                value: TokenValue::from(digit),
                start: column,
                end: column + 1,
            });
        }
    }
    tokens.extend(pending);

    Ok(tokens)
}

/// Everything the scanners need to know about one line, derived once when it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    pub index: usize,
    pub tokens: Vec<Token>,
    /// Columns of every symbol, ascending.
    pub symbols: Vec<usize>,
    /// Columns of gear symbols, ascending. A subset of `symbols`.
    pub gears: Vec<usize>,
}

impl ScannedLine {
    /// Scan line number `index` of the grid.
    ///
    /// # Errors
    ///
    /// Returns [`SchematicError::TokenOverflow`] if a number does not fit in [`TokenValue`].
    pub fn scan(index: usize, line: &str, markers: &Markers) -> Result<Self, SchematicError> {
        let tokens = extract_tokens(line).map_err(|TokenOverflow { column }| {
            SchematicError::TokenOverflow {
                line_index: index,
                column,
            }
        })?;

        let mut symbols = Vec::new();
        let mut gears = Vec::new();
        for (column, character) in line.chars().enumerate() {
            if markers.is_symbol(character) {
                symbols.push(column);
                if markers.is_gear(character) {
                    gears.push(column);
                }
            }
        }

        Ok(Self {
            index,
            tokens,
            symbols,
            gears,
        })
    }

    /// Tokens of this line touching a symbol at `column`.
    pub fn tokens_adjacent_to(&self, column: usize) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(move |token| token.is_adjacent_to(column))
    }
}
