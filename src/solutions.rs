//! Solutions for Advent of Code 2023, dispatched by day with [`run_day`].
//!
//! Adding a day:
//! 1. Create a submodule implementing [`Solution`][aoc_framework::Solution] for the parts.
//! 2. Annotate `impl super::AdventOfCode2023<DAY> {}` with
//!    [`#[solution_runner]`][aoc_framework::runner::solution_runner].
//! 3. Declare the submodule and add its match arm to [`run_day`].

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, SolutionRunner};
use log::info;
use thiserror::Error;

mod day01;
mod day02;
mod day03;

/// Solutions collected by day; each submodule implements [`SolutionRunner`] for its day.
struct AdventOfCode2023<const DAY: u8>;

#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(pub u8);

/// Run the solution for `day` against `input`.
///
/// # Errors
///
/// [`DayNotAvailable`] for a day without a solution, otherwise any error from the solution.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    info!("running day {day} on {} lines of input", input.lines().count());
    match day {
        1 => AdventOfCode2023::<1>::run(input, handler, timed),
        2 => AdventOfCode2023::<2>::run(input, handler, timed),
        3 => AdventOfCode2023::<3>::run(input, handler, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}
