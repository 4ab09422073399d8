use std::collections::HashSet;

use checked_sum::CheckedSum;
use log::{debug, trace};

use super::{LineWindow, Markers, ScannedLine, SchematicError, TokenId, TokenValue};
use crate::checked_product::CheckedProduct;

/// Sum the tokens of `owner` touching any of `symbols`, skipping tokens already claimed.
///
/// Newly matched tokens are added to `claimed`. Returns `None` on overflow.
fn claim_adjacent(
    claimed: &mut HashSet<TokenId>,
    owner: &ScannedLine,
    symbols: &[usize],
) -> Option<TokenValue> {
    owner
        .tokens
        .iter()
        .filter(|token| symbols.iter().any(|&column| token.is_adjacent_to(column)))
        .filter(|token| claimed.insert(token.id(owner.index)))
        .map(|token| {
            trace!("line {}: part number {}", owner.index, token.value);
            token.value
        })
        .checked_sum()
}

/// Streams grid lines and sums every number touching a symbol, each number counted once.
///
/// Keeps the previous and current line. A number on the current line may touch a symbol on the
/// current or previous line, and a number on the previous line may touch a symbol on the current
/// one; together with the previous step this covers every pair of neighbouring lines.
#[derive(Debug, Default)]
pub struct PartNumberScanner {
    markers: Markers,
    window: LineWindow<ScannedLine, 2>,
    claimed: HashSet<TokenId>,
    lines_read: usize,
    total: TokenValue,
}

impl PartNumberScanner {
    #[must_use]
    pub fn new(markers: Markers) -> Self {
        Self {
            markers,
            ..Self::default()
        }
    }

    /// Read the next line, returning the sum of part numbers found by it.
    ///
    /// # Errors
    ///
    /// Fails with [`SchematicError::TokenOverflow`] or [`SchematicError::SumOverflow`] when the
    /// numbers are too large.
    pub fn push_line(&mut self, line: &str) -> Result<TokenValue, SchematicError> {
        let line_index = self.lines_read;
        let current = ScannedLine::scan(line_index, line, &self.markers)?;
        self.lines_read += 1;

        let overflow = SchematicError::SumOverflow { line_index };
        let mut partial = claim_adjacent(&mut self.claimed, &current, &current.symbols)
            .ok_or(overflow.clone())?;
        if let Some(previous) = self.window.newest() {
            let from_previous = [
                claim_adjacent(&mut self.claimed, previous, &current.symbols),
                claim_adjacent(&mut self.claimed, &current, &previous.symbols),
            ];
            for sum in from_previous {
                partial = sum
                    .and_then(|sum| partial.checked_add(sum))
                    .ok_or(overflow.clone())?;
            }
        }

        // tokens above the current line can no longer be reached
        self.claimed.retain(|id| id.line_index >= line_index);
        self.total = self.total.checked_add(partial).ok_or(overflow)?;
        trace!("line {line_index}: part numbers add {partial}");

        self.window.push(Some(current));
        Ok(partial)
    }

    /// The sum of part numbers over every line read so far.
    #[must_use]
    pub fn total(&self) -> TokenValue {
        self.total
    }
}

/// Streams grid lines and sums the ratios of gears: gear symbols touching exactly two numbers.
///
/// Keeps three lines. Once a line is read, gears on the line before it (the middle of the
/// window) are resolved against the lines above and below. [`GearScanner::finish`] resolves the
/// final line with an empty slot below it.
#[derive(Debug, Default)]
pub struct GearScanner {
    markers: Markers,
    window: LineWindow<ScannedLine, 3>,
    lines_read: usize,
    total: TokenValue,
}

/// The product of a gear's neighbouring numbers, only when there are exactly two.
///
/// Returns `Some(None)` for a symbol that does not form a gear and `None` on overflow.
fn gear_ratio(neighbours: &[TokenValue]) -> Option<Option<TokenValue>> {
    match neighbours {
        [_, _] => neighbours.iter().copied().checked_product().map(Some),
        _ => Some(None),
    }
}

impl GearScanner {
    #[must_use]
    pub fn new(markers: Markers) -> Self {
        Self {
            markers,
            ..Self::default()
        }
    }

    /// Read the next line, returning the sum of ratios of gears resolved by it.
    ///
    /// # Errors
    ///
    /// Fails with [`SchematicError::TokenOverflow`] or [`SchematicError::RatioOverflow`] when the
    /// numbers are too large.
    pub fn push_line(&mut self, line: &str) -> Result<TokenValue, SchematicError> {
        let scanned = ScannedLine::scan(self.lines_read, line, &self.markers)?;
        self.lines_read += 1;
        self.slide(Some(scanned))
    }

    /// Resolve gears on the last line and return the sum of all gear ratios.
    ///
    /// # Errors
    ///
    /// Fails with [`SchematicError::RatioOverflow`] when the numbers are too large.
    pub fn finish(mut self) -> Result<TokenValue, SchematicError> {
        self.slide(None)?;
        debug!(
            "gear ratios over {} lines sum to {}",
            self.lines_read, self.total
        );
        Ok(self.total)
    }

    fn slide(&mut self, incoming: Option<ScannedLine>) -> Result<TokenValue, SchematicError> {
        self.window.push(incoming);
        let Some(middle) = self.window.slot(1) else {
            return Ok(0);
        };

        let mut partial: TokenValue = 0;
        for &column in &middle.gears {
            let overflow = SchematicError::RatioOverflow {
                line_index: middle.index,
                column,
            };
            // a third neighbour already disqualifies the gear
            let neighbours: Vec<TokenValue> = self
                .window
                .iter()
                .flat_map(|line| line.tokens_adjacent_to(column))
                .map(|token| token.value)
                .take(3)
                .collect();

            let Some(ratio) = gear_ratio(&neighbours).ok_or(overflow.clone())? else {
                continue;
            };
            trace!(
                "line {}: gear at column {column} has ratio {ratio}",
                middle.index
            );
            partial = partial.checked_add(ratio).ok_or(overflow)?;
        }

        self.total = self
            .total
            .checked_add(partial)
            .ok_or(SchematicError::RatioOverflow {
                line_index: middle.index,
                column: 0,
            })?;
        Ok(partial)
    }
}

/// Sum of every number adjacent to a symbol, using the default [`Markers`].
///
/// # Errors
///
/// See [`PartNumberScanner::push_line`].
pub fn sum_of_adjacent_values<I>(lines: I) -> Result<TokenValue, SchematicError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scanner = PartNumberScanner::new(Markers::default());
    for line in lines {
        scanner.push_line(line.as_ref())?;
    }
    debug!(
        "part numbers over {} lines sum to {}",
        scanner.lines_read,
        scanner.total()
    );
    Ok(scanner.total())
}

/// Sum of the ratios of every gear, using the default [`Markers`].
///
/// # Errors
///
/// See [`GearScanner::push_line`] and [`GearScanner::finish`].
pub fn sum_of_gear_ratios<I>(lines: I) -> Result<TokenValue, SchematicError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scanner = GearScanner::new(Markers::default());
    for line in lines {
        scanner.push_line(line.as_ref())?;
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_GRID: [&str; 10] = [
        "467..114..",
        "...*......",
        "..35..633.",
        "......#...",
        "617*......",
        ".....+.58.",
        "..592.....",
        "......755.",
        "...$.*....",
        ".664.598..",
    ];

    #[test]
    fn sums_example_part_numbers() -> Result<(), SchematicError> {
        assert_eq!(sum_of_adjacent_values(EXAMPLE_GRID)?, 4361);
        Ok(())
    }

    #[test]
    fn sums_example_gear_ratios() -> Result<(), SchematicError> {
        assert_eq!(sum_of_gear_ratios(EXAMPLE_GRID)?, 467_835);
        Ok(())
    }

    #[test]
    fn sums_first_four_lines() -> Result<(), SchematicError> {
        let lines = &EXAMPLE_GRID[..4];
        assert_eq!(sum_of_adjacent_values(lines)?, 467 + 35 + 633);
        assert_eq!(sum_of_gear_ratios(lines)?, 467 * 35);
        Ok(())
    }

    #[test]
    fn repeated_scans_agree() -> Result<(), SchematicError> {
        let first = sum_of_adjacent_values(EXAMPLE_GRID)?;
        let second = sum_of_adjacent_values(EXAMPLE_GRID)?;
        assert_eq!(first, second);
        assert_eq!(sum_of_gear_ratios(EXAMPLE_GRID)?, sum_of_gear_ratios(EXAMPLE_GRID)?);
        Ok(())
    }

    #[test]
    fn empty_grid_sums_to_zero() -> Result<(), SchematicError> {
        let lines: [&str; 0] = [];
        assert_eq!(sum_of_adjacent_values(lines)?, 0);
        assert_eq!(sum_of_gear_ratios(lines)?, 0);
        Ok(())
    }

    #[test]
    fn lines_without_symbols_contribute_nothing() -> Result<(), SchematicError> {
        let lines = ["12..34", "..56..", "7....8"];
        assert_eq!(sum_of_adjacent_values(lines)?, 0);
        assert_eq!(sum_of_gear_ratios(lines)?, 0);
        Ok(())
    }

    #[test]
    fn number_touching_two_symbols_counts_once() -> Result<(), SchematicError> {
        // same line, above, and below all touch 42
        let lines = ["#...", "42*.", ".$.."];
        assert_eq!(sum_of_adjacent_values(lines)?, 42);
        Ok(())
    }

    #[test]
    fn numbers_touching_symbols_on_both_lines_count_once() -> Result<(), SchematicError> {
        let lines = ["*5.", "5*."];
        assert_eq!(sum_of_adjacent_values(lines)?, 10);
        Ok(())
    }

    #[test]
    fn equal_numbers_on_different_lines_both_count() -> Result<(), SchematicError> {
        let lines = ["7..", ".*.", "7.."];
        assert_eq!(sum_of_adjacent_values(lines)?, 14);
        Ok(())
    }

    #[test]
    fn symbol_on_row_above_reaches_left_edge_number() -> Result<(), SchematicError> {
        let lines = ["*.....", "123...", "......"];
        assert_eq!(sum_of_adjacent_values(lines)?, 123);
        Ok(())
    }

    #[test]
    fn symbol_on_row_below_reaches_diagonally() -> Result<(), SchematicError> {
        let lines = ["..12..", "....%.", "..5..7", ".....*"];
        assert_eq!(sum_of_adjacent_values(lines)?, 12 + 7);
        Ok(())
    }

    #[test]
    fn far_symbols_do_not_reach() -> Result<(), SchematicError> {
        let lines = ["12...", "...#.", ".....", "#..99"];
        assert_eq!(sum_of_adjacent_values(lines)?, 0);
        Ok(())
    }

    #[test]
    fn partial_sums_follow_lines() -> Result<(), SchematicError> {
        let mut scanner = PartNumberScanner::new(Markers::default());
        assert_eq!(scanner.push_line("467..114..")?, 0);
        assert_eq!(scanner.push_line("...*......")?, 467);
        assert_eq!(scanner.push_line("..35..633.")?, 35);
        assert_eq!(scanner.push_line("......#...")?, 633);
        assert_eq!(scanner.total(), 1135);
        Ok(())
    }

    #[test]
    fn gear_needs_exactly_two_numbers() -> Result<(), SchematicError> {
        assert_eq!(sum_of_gear_ratios(["..*.."])?, 0);
        assert_eq!(sum_of_gear_ratios(["3*..."])?, 0);
        assert_eq!(sum_of_gear_ratios(["3*4.."])?, 12);
        assert_eq!(sum_of_gear_ratios(["1.2", "3*.", "..."])?, 0);
        Ok(())
    }

    #[test]
    fn gear_on_single_line_grid() -> Result<(), SchematicError> {
        assert_eq!(sum_of_gear_ratios(["2*3*4"])?, 2 * 3 + 3 * 4);
        Ok(())
    }

    #[test]
    fn gears_on_boundary_rows() -> Result<(), SchematicError> {
        let top = ["10*20", "....."];
        assert_eq!(sum_of_gear_ratios(top)?, 200);
        let bottom = [".....", "..6..", "..*.7"];
        assert_eq!(sum_of_gear_ratios(bottom)?, 0);
        let bottom = [".....", "..6..", "..*7."];
        assert_eq!(sum_of_gear_ratios(bottom)?, 42);
        Ok(())
    }

    #[test]
    fn gear_scanner_resolves_middle_line() -> Result<(), SchematicError> {
        let mut scanner = GearScanner::new(Markers::default());
        assert_eq!(scanner.push_line("467..114..")?, 0);
        assert_eq!(scanner.push_line("...*......")?, 0);
        assert_eq!(scanner.push_line("..35..633.")?, 16_345);
        assert_eq!(scanner.finish()?, 16_345);
        Ok(())
    }

    #[test]
    fn custom_gear_marker() -> Result<(), SchematicError> {
        let markers = Markers {
            empty: '.',
            gear: '@',
        };
        let mut scanner = GearScanner::new(markers);
        scanner.push_line("2@5*6")?;
        assert_eq!(scanner.finish()?, 10);
        Ok(())
    }

    #[test]
    fn ratio_overflow_is_an_error() {
        let big = TokenValue::MAX / 2;
        let line = format!("{big}*{big}");
        assert_eq!(
            sum_of_gear_ratios([line]),
            Err(SchematicError::RatioOverflow {
                line_index: 0,
                column: 19
            })
        );
    }

    #[test]
    fn sum_overflow_is_an_error() {
        let big = TokenValue::MAX / 2 + 1;
        let line = format!("{big}#{big}");
        assert_eq!(
            sum_of_adjacent_values([line]),
            Err(SchematicError::SumOverflow { line_index: 0 })
        );
    }
}
