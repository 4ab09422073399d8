#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_framework::runner::{OutputHandler, RunEvent};
use clap::{ArgAction, Parser};
use log::debug;

mod checked_product;
mod logger;
mod schematic;
mod solutions;

/// Advent of Code 2023 puzzle solver.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// The day to solve (e.g. 1, 2, 3).
    day: u8,

    /// Read puzzle input from FILE instead of `inputs/dayNN.txt`.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Measure and print how long parsing and each part take.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Only print timings of at least this many milliseconds. 0 prints every timing.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,

    /// Log more detail to stderr; repeat for more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| {
            PathBuf::from("inputs").join(format!("day{:02}.txt", self.day))
        })
    }
}

fn read_input(path: &Path, is_default: bool) -> Result<String> {
    debug!("reading input from {}", path.display());
    fs::read_to_string(path).with_context(|| {
        if is_default {
            format!(
                "default input file missing: {}\n\n\
                please create the file or provide the input file argument",
                path.display()
            )
        } else {
            format!("could not read input file at: {}", path.display())
        }
    })
}

/// Prints run events to stdout.
struct CliOutputHandler {
    /// Timings shorter than this are not printed.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    fn format_duration(duration: Duration) -> String {
        const DECIMAL_PLACES: usize = 3;

        let (value, unit) = if duration >= Duration::from_secs(1) {
            (duration.as_secs_f64(), "seconds")
        } else if duration >= Duration::from_millis(1) {
            (duration.as_secs_f64() * 1e3, "milliseconds")
        } else if duration >= Duration::from_micros(1) {
            (duration.as_secs_f64() * 1e6, "microseconds")
        } else {
            return format!("{} nanoseconds", duration.subsec_nanos());
        };
        format!("{value:.DECIMAL_PLACES$} {unit}")
    }

    fn shown_duration(&self, duration: Option<Duration>) -> Option<String> {
        duration
            .filter(|duration| *duration >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn handle(&mut self, event: RunEvent<'_>) {
        match event {
            RunEvent::SolutionStarted { name } => println!("= {name} ="),
            RunEvent::ParseStarted => {}
            RunEvent::ParseFinished { duration } => {
                if let Some(duration) = self.shown_duration(duration) {
                    println!("Input parsed in {duration}");
                }
            }
            RunEvent::PartStarted(part) => println!("-- {part} --"),
            RunEvent::PartSolved {
                output, duration, ..
            } => match self.shown_duration(duration) {
                Some(duration) => println!("{output} ({duration})"),
                None => println!("{output}"),
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    logger::init(args.verbose)?;

    let input = read_input(&args.input_path(), args.input.is_none())?;
    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));
    solutions::run_day(args.day, &input, &mut handler, args.timed).map_err(|dyn_error| {
        Error::from_boxed(dyn_error).context("failed to run solution")
    })
}
