//! Entry point traits implemented by puzzle units

use crate::error::SolveError;
use crate::puzzle::Part;
use std::fmt::Display;

/// Trait for one entry point of a puzzle unit.
///
/// The const generic `PART` is the entry point's name, `'a'` or `'b'`.
/// A unit implements the trait once per part it supports; a part without an
/// implementation is reported as a missing entry point by the runner.
///
/// # Example
///
/// ```
/// use aoc_runner::{EntryPoint, ParseError, SolveError};
///
/// struct Day1;
///
/// impl EntryPoint<'a'> for Day1 {
///     type Answer = i64;
///
///     fn solve(input: &str) -> Result<i64, SolveError> {
///         input
///             .lines()
///             .map(|l| {
///                 l.parse::<i64>()
///                     .map_err(|_| SolveError::from(ParseError::InvalidFormat(l.into())))
///             })
///             .sum()
///     }
/// }
///
/// assert_eq!(<Day1 as EntryPoint<'a'>>::solve("1\n2\n3").unwrap(), 6);
/// ```
pub trait EntryPoint<const PART: char> {
    /// Anything that can be displayed; normalised to a string by the runner
    type Answer: Display;

    /// Solve this part for the raw puzzle input
    fn solve(input: &str) -> Result<Self::Answer, SolveError>;
}

/// Type-erased entry point stored in the registry
pub type EntryFn = fn(&str) -> Result<String, SolveError>;

/// Erase an [`EntryPoint`] implementation into an [`EntryFn`]
pub fn entry_fn<S, const PART: char>(input: &str) -> Result<String, SolveError>
where
    S: EntryPoint<PART>,
{
    S::solve(input).map(|answer| answer.to_string())
}

/// The entry points a unit exposes
#[derive(Clone, Copy, Default)]
pub struct EntryPoints {
    pub a: Option<EntryFn>,
    pub b: Option<EntryFn>,
}

impl EntryPoints {
    /// Look up the entry point named by `part`
    pub fn get(&self, part: Part) -> Option<EntryFn> {
        match part {
            Part::A => self.a,
            Part::B => self.b,
        }
    }

    /// Whether the entry point named by `part` exists
    pub fn has(&self, part: Part) -> bool {
        self.get(part).is_some()
    }
}

impl std::fmt::Debug for EntryPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryPoints")
            .field("a", &self.a.is_some())
            .field("b", &self.b.is_some())
            .finish()
    }
}
