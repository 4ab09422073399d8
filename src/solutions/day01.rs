use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use log::debug;
use regex::Regex;
use thiserror::Error;

#[solution_runner(name = "Day 1: Trebuchet?!", part_one = Day01, part_two = Day01)]
impl super::AdventOfCode2023<1> {}

#[derive(Error, Debug)]
#[error("integer overflow while summing calibration values")]
struct CalibrationOverflow;

/*
Each line of the calibration document hides a value: the first digit and the last digit of the
line, read as a two-digit number. A single digit serves as both. Lines without any digit carry no
value and are skipped.

Part 2 also reads digits spelled out as words. Words may share letters ("eightwo" holds 8 and 2),
so every position of the line is tried as a possible start.
*/

type CalibrationValue = u32;

fn combine(first: u8, last: u8) -> CalibrationValue {
    CalibrationValue::from(first) * 10 + CalibrationValue::from(last)
}

/// First and last items of an iterator that can be walked from both ends.
fn first_and_last<I>(mut digits: I) -> Option<(u8, u8)>
where
    I: DoubleEndedIterator<Item = u8>,
{
    let first = digits.next()?;
    let last = digits.next_back().unwrap_or(first);
    Some((first, last))
}

fn calibration_value_by_digit(line: &str) -> Option<CalibrationValue> {
    let digits = line
        .chars()
        .filter_map(|c| c.to_digit(10))
        .filter_map(|d| u8::try_from(d).ok());
    first_and_last(digits).map(|(first, last)| combine(first, last))
}

/// Recognises a digit, numeric or spelled out, at the very start of a string.
struct DigitReader {
    leading_digit_re: Regex,
}

impl DigitReader {
    const PATTERN: &str = r"^(?:[0-9]|zero|one|two|three|four|five|six|seven|eight|nine)";

    fn new() -> Self {
        let leading_digit_re = Regex::new(Self::PATTERN).expect("pattern should be valid");
        Self { leading_digit_re }
    }

    fn digit_at(&self, rest: &str) -> Option<u8> {
        let found = self.leading_digit_re.find(rest)?;
        let digit = match found.as_str() {
            "zero" => 0,
            "one" => 1,
            "two" => 2,
            "three" => 3,
            "four" => 4,
            "five" => 5,
            "six" => 6,
            "seven" => 7,
            "eight" => 8,
            "nine" => 9,
            numeral => numeral.parse().ok()?,
        };
        Some(digit)
    }

    fn calibration_value(&self, line: &str) -> Option<CalibrationValue> {
        let digits = line
            .char_indices()
            .filter_map(|(start, _)| self.digit_at(&line[start..]));
        first_and_last(digits).map(|(first, last)| combine(first, last))
    }
}

fn sum_calibration_values(
    input: &str,
    value_of: impl Fn(&str) -> Option<CalibrationValue>,
) -> Result<CalibrationValue, CalibrationOverflow> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let value = value_of(line);
            if value.is_none() {
                debug!("line {} has no digits", index + 1);
            }
            value
        })
        .checked_sum()
        .ok_or(CalibrationOverflow)
}

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = str;
    type Output = CalibrationValue;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_calibration_values(input, calibration_value_by_digit)?)
    }
}

impl Solution<PartTwo> for Day01 {
    type Input = str;
    type Output = CalibrationValue;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let reader = DigitReader::new();
        Ok(sum_calibration_values(input, |line| {
            reader.calibration_value(line)
        })?)
    }
}
