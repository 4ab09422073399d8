//! Traits and runner utilities shared by Advent of Code solutions.
//!
//! A solution is a type implementing [`Solution<PartOne>`] and optionally
//! [`Solution<PartTwo>`]. Input is either handed over as the raw `str`, or first parsed into a
//! type implementing [`ParseData`].
//!
//! ```
//! use aoc_framework::{DynamicResult, ParseData, PartOne, Solution};
//!
//! struct Depths(Vec<u32>);
//!
//! impl ParseData for Depths {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let depths = input
//!             .lines()
//!             .map(str::parse)
//!             .collect::<Result<Vec<_>, _>>()?;
//!         Ok(Self(depths))
//!     }
//! }
//!
//! struct Sonar;
//!
//! impl Solution<PartOne> for Sonar {
//!     type Input = Depths;
//!     type Output = usize;
//!
//!     fn solve(input: &Depths) -> DynamicResult<usize> {
//!         Ok(input.0.windows(2).filter(|pair| pair[1] > pair[0]).count())
//!     }
//! }
//!
//! let depths = Depths::parse("199\n200\n208\n210\n200").unwrap();
//! assert_eq!(<Sonar as Solution<PartOne>>::solve(&depths).unwrap(), 3);
//! ```
//!
//! Solutions taking the raw input set `Input = str`:
//!
//! ```
//! use aoc_framework::{DynamicResult, PartTwo, Solution};
//!
//! struct LineCount;
//!
//! impl Solution<PartTwo> for LineCount {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//!
//! assert_eq!(<LineCount as Solution<PartTwo>>::solve("a\nb").unwrap(), 2);
//! ```
//!
//! See [`runner`] to execute solutions and report their output.

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
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

// lets generated `::aoc_framework` paths resolve inside this crate's own tests
extern crate self as aoc_framework;

use std::error::Error;
use std::fmt::{self, Display};

pub mod parsing;
pub mod runner;

mod sealed {
    /// Keeps [`Part`][super::Part] implementable only by the markers in this crate.
    pub trait Sealed {}
}

/// A boxed error that any solution step may return.
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result carrying a [`DynamicError`].
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Identifies which half of a puzzle is being solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = match self {
            Self::One => 1,
            Self::Two => 2,
        };
        write!(f, "Part {number}")
    }
}

/// Type-level marker for a puzzle part, used as the generic parameter of [`Solution`].
pub trait Part: sealed::Sealed {
    /// The runtime counterpart of this marker.
    const KIND: PartKind;
}

/// Marker for part one.
pub struct PartOne;
impl sealed::Sealed for PartOne {}
impl Part for PartOne {
    const KIND: PartKind = PartKind::One;
}

/// Marker for part two.
pub struct PartTwo;
impl sealed::Sealed for PartTwo {}
impl Part for PartTwo {
    const KIND: PartKind = PartKind::Two;
}

/// A solver for one [`Part`] of a puzzle.
pub trait Solution<P: Part> {
    /// What the solver receives a reference to. Use `str` for the unparsed input.
    type Input: ?Sized;

    /// The answer, displayed by the runner.
    type Output: Display;

    /// Solve the part for the given input.
    ///
    /// # Errors
    ///
    /// Invalid input, or arithmetic that does not fit the output type, is returned as a
    /// [`DynamicError`].
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// Data that is built from the puzzle input before solving.
pub trait ParseData: Sized {
    /// Parse the whole input string.
    ///
    /// # Errors
    ///
    /// Any parse failure is returned as a [`DynamicError`].
    fn parse(input: &str) -> DynamicResult<Self>;
}
