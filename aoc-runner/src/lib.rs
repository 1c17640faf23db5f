//! Advent of Code Runner Library
//!
//! Resolves puzzle references, keeps a registry of puzzle units and runs
//! their entry points.
//!
//! # Overview
//!
//! - [`PuzzleRef`] is a validated `(year, day, part)` triple, parsed from
//!   `YYYY/D[D][a|b]`, a unit path, or separate values.
//! - A puzzle unit implements [`EntryPoint<'a'>`](EntryPoint) and/or
//!   [`EntryPoint<'b'>`](EntryPoint), each a pure function from the raw
//!   input to something displayable.
//! - `#[derive(Puzzle)]` submits the unit to the registry at link time.
//! - [`SolverRegistry::run`] looks a unit up, invokes the requested entry
//!   point and returns its answer as a string.
//!
//! # Quick Example
//!
//! ```
//! use aoc_runner::{EntryPoint, EntryPoints, Part, PuzzleRef, RegistryBuilder, SolveError, entry_fn};
//!
//! pub struct MyDay1;
//!
//! impl EntryPoint<'a'> for MyDay1 {
//!     type Answer = u32;
//!
//!     fn solve(input: &str) -> Result<u32, SolveError> {
//!         Ok(input.lines().count() as u32)
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(2023, 1, EntryPoints { a: Some(entry_fn::<MyDay1, 'a'>), b: None }, &[])
//!     .unwrap()
//!     .build();
//!
//! let puzzle = PuzzleRef::parse("2023/1a", true).unwrap();
//! let part = puzzle.require_part().unwrap();
//! let answer = registry.run(puzzle.year(), puzzle.day(), part, "1\n2\n3").unwrap();
//! assert_eq!(answer, "3");
//!
//! // Part b was never defined
//! assert!(registry.run(2023, 1, Part::B, "1").is_err());
//! ```
//!
//! # Registering with the derive macro
//!
//! ```ignore
//! #[derive(Puzzle)]
//! #[puzzle(year = 2023, day = 1, parts = [a, b], tags = ["strings"])]
//! pub struct Solver;
//! ```

mod error;
mod execution;
mod puzzle;
mod registry;
mod solver;

pub use error::{ParseError, PuzzleRefError, RegistrationError, SolveError, SolverError};
pub use execution::ExecutionResult;
pub use puzzle::{DAYS, FIRST_YEAR, Part, PuzzleRef, latest_event_year, solution_path};
pub use registry::{RegistryBuilder, SolverPlugin, SolverRegistry, UnitInfo};
pub use solver::{EntryFn, EntryPoint, EntryPoints, entry_fn};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_runner_macros::Puzzle;
