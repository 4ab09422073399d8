use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};

use crate::schematic::{TokenValue, sum_of_adjacent_values, sum_of_gear_ratios};

#[solution_runner(name = "Day 3: Gear Ratios", part_one = Day03, part_two = Day03)]
impl super::AdventOfCode2023<3> {}

/*
Input is an engine schematic. Numbers touching a symbol (anything but digits and `.`), even
diagonally, are part numbers; part 1 sums them.

Part 2 sums gear ratios: a `*` touching exactly two part numbers has the product of the two as its
ratio.

Both parts stream the schematic line by line through the scanners in `crate::schematic`.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = str;
    type Output = TokenValue;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_of_adjacent_values(input.lines())?)
    }
}

impl Solution<PartTwo> for Day03 {
    type Input = str;
    type Output = TokenValue;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_of_gear_ratios(input.lines())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let result = <Day03 as Solution<PartOne>>::solve(EXAMPLE_INPUT)?;
        assert_eq!(result, 4361);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let result = <Day03 as Solution<PartTwo>>::solve(EXAMPLE_INPUT)?;
        assert_eq!(result, 467_835);
        Ok(())
    }

    #[test]
    fn windows_line_endings_are_not_symbols() -> DynamicResult<()> {
        let input = EXAMPLE_INPUT.replace('\n', "\r\n");
        assert_eq!(<Day03 as Solution<PartOne>>::solve(&input)?, 4361);
        assert_eq!(<Day03 as Solution<PartTwo>>::solve(&input)?, 467_835);
        Ok(())
    }

    #[test]
    fn empty_input_solves_to_zero() -> DynamicResult<()> {
        assert_eq!(<Day03 as Solution<PartOne>>::solve("")?, 0);
        assert_eq!(<Day03 as Solution<PartTwo>>::solve("")?, 0);
        Ok(())
    }
}
