//! Running solutions and reporting what happens along the way.
//!
//! The [`solution_runner`] attribute implements [`SolutionRunner`] for a type by driving a
//! [`Run`]:
//!
//! ```
//! use aoc_framework::runner::{solution_runner, OutputHandler, RunEvent, SolutionRunner};
//! use aoc_framework::{DynamicResult, PartOne, Solution};
//!
//! struct Sum;
//!
//! impl Solution<PartOne> for Sum {
//!     type Input = str;
//!     type Output = u32;
//!
//!     fn solve(input: &str) -> DynamicResult<u32> {
//!         Ok(input.lines().map(|line| line.parse::<u32>()).sum::<Result<u32, _>>()?)
//!     }
//! }
//!
//! #[solution_runner(name = "Sum", part_one = Sum)]
//! struct SumRunner;
//!
//! #[derive(Default)]
//! struct Answers(Vec<String>);
//!
//! impl OutputHandler for Answers {
//!     fn handle(&mut self, event: RunEvent<'_>) {
//!         if let RunEvent::PartSolved { output, .. } = event {
//!             self.0.push(output.to_string());
//!         }
//!     }
//! }
//!
//! let mut answers = Answers::default();
//! SumRunner::run("1\n2\n3", &mut answers, false).unwrap();
//! assert_eq!(answers.0, ["6"]);
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use log::debug;

use crate::{DynamicResult, ParseData, Part, PartKind, Solution};

pub use aoc_framework_macros::solution_runner;

/// Something that happened while running a solution.
#[derive(Clone, Copy)]
pub enum RunEvent<'a> {
    /// A solution is starting; carries its display name.
    SolutionStarted { name: &'a str },
    /// Input parsing is starting.
    ParseStarted,
    /// Input parsing finished. `duration` is only measured for timed runs.
    ParseFinished { duration: Option<Duration> },
    /// A part is starting.
    PartStarted(PartKind),
    /// A part produced its answer. `duration` is only measured for timed runs.
    PartSolved {
        part: PartKind,
        output: &'a dyn Display,
        duration: Option<Duration>,
    },
}

/// Receives [`RunEvent`]s, typically to print them.
pub trait OutputHandler {
    fn handle(&mut self, event: RunEvent<'_>);
}

/// Evaluate `f`, measuring how long it took when `enabled`.
fn measure<T>(enabled: bool, f: impl FnOnce() -> T) -> (T, Option<Duration>) {
    if enabled {
        let start = Instant::now();
        let value = f();
        (value, Some(start.elapsed()))
    } else {
        (f(), None)
    }
}

/// One execution of a solution, forwarding progress to an [`OutputHandler`].
pub struct Run<'h> {
    handler: &'h mut dyn OutputHandler,
    timed: bool,
}

impl<'h> Run<'h> {
    /// Begin a run, announcing the solution name.
    pub fn start(name: &str, handler: &'h mut dyn OutputHandler, timed: bool) -> Self {
        debug!("starting {name:?} (timed: {timed})");
        handler.handle(RunEvent::SolutionStarted { name });
        Self { handler, timed }
    }

    /// Parse the input into `D`.
    ///
    /// # Errors
    ///
    /// Any error from [`ParseData::parse`] is propagated.
    pub fn parse<D: ParseData>(&mut self, input: &str) -> DynamicResult<D> {
        self.handler.handle(RunEvent::ParseStarted);
        let (parsed, duration) = measure(self.timed, || D::parse(input));
        let parsed = parsed?;
        debug!("input parsed ({} bytes)", input.len());
        self.handler.handle(RunEvent::ParseFinished { duration });
        Ok(parsed)
    }

    /// Solve part `P` with solution `S`, reporting the answer.
    ///
    /// # Errors
    ///
    /// Any error from [`Solution::solve`] is propagated; nothing is reported for the part.
    pub fn part<P, S>(&mut self, input: &S::Input) -> DynamicResult<()>
    where
        P: Part,
        S: Solution<P>,
    {
        let part = P::KIND;
        self.handler.handle(RunEvent::PartStarted(part));
        let (output, duration) = measure(self.timed, || S::solve(input));
        let output = output?;
        debug!("{part} solved");
        self.handler.handle(RunEvent::PartSolved {
            part,
            output: &output,
            duration,
        });
        Ok(())
    }
}

/// A solution that can be run against raw input. Usually derived with [`solution_runner`].
pub trait SolutionRunner {
    /// Run every available part against `input`.
    ///
    /// # Errors
    ///
    /// Parse and solve errors are propagated; the run stops at the first one.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}
