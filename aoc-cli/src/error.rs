//! Error types for the CLI

use aoc_runner::Part;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Puzzle reference could not be resolved
    #[error(transparent)]
    PuzzleRef(#[from] aoc_runner::PuzzleRefError),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_client::AocError),

    /// Running a solution failed
    #[error(transparent)]
    Solver(#[from] aoc_runner::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_runner::RegistrationError),

    /// User ID mismatch
    #[error("User ID mismatch: expected {expected}, got {actual}")]
    UserIdMismatch { expected: u64, actual: u64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// At least one example produced a wrong answer or an error
    #[error("{failed} of {total} example(s) failed. Fix your solution before running on real input")]
    ExamplesFailed { failed: usize, total: usize },

    /// The service did not accept the submitted answer
    #[error("Answer '{answer}' for part {part} was not accepted: {reason}")]
    SubmissionRejected {
        part: Part,
        answer: String,
        reason: String,
    },

    /// `new` would overwrite an existing unit
    #[error("Solution file already exists at {}. Use --force to overwrite", .0.display())]
    UnitExists(PathBuf),
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),
}
