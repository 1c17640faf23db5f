//! Error types for the runner library

use crate::puzzle::Part;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for resolving a user-supplied puzzle reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleRefError {
    /// Reference does not look like `YYYY/D[D][a|b]`
    #[error("Invalid puzzle format '{0}', expected YYYY/DD[a|b] (e.g. 2024/3a, 2024/15b)")]
    InvalidFormat(String),
    /// Reference looks like a file path but doesn't follow the unit layout
    #[error("Invalid file path format '{0}', expected solutions/year_YYYY/day_DD.rs")]
    InvalidPath(String),
    /// Day is outside 1..=25
    #[error("Day must be between 1 and 25, got {0}")]
    DayOutOfRange(u32),
    /// Caller requires a part but none was given
    #[error("Part (a or b) is required, e.g. 2024/3a")]
    PartRequired,
    /// Part is neither `a` nor `b`
    #[error("Part must be 'a' or 'b', got '{0}'")]
    InvalidPart(String),
}

/// Error type for parsing puzzle input inside a solution
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type returned by an entry point
#[derive(Debug, Error)]
pub enum SolveError {
    /// The input could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error (including `anyhow::Error`) raised while solving
    pub fn failed(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Failed(error.into())
    }
}

/// Error type for runner operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No unit is registered for the given year and day
    #[error("Solution not found for year {year} day {day} (expected at {})", path.display())]
    NotFound { year: u16, day: u8, path: PathBuf },
    /// The unit exists but doesn't define the requested entry point
    #[error("Solution for year {year} day {day} does not have a '{part}' entry point")]
    MissingEntryPoint { year: u16, day: u8, part: Part },
    /// The entry point returned an error
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// The entry point panicked
    #[error("Solution panicked: {0}")]
    Panicked(String),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a unit for a year-day combination that already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Day is outside 1..=25
    #[error("Cannot register solver for year {0} day {1}: day out of range")]
    InvalidYearDay(u16, u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        let messages: Vec<String> = [
            ParseError::InvalidFormat("expected integer".into()),
            ParseError::MissingData("empty grid".into()),
        ]
        .iter()
        .map(|error| match error {
            ParseError::InvalidFormat(_) | ParseError::MissingData(_) => error.to_string(),
        })
        .collect();
        assert_eq!(messages, ["Invalid format: expected integer", "Missing data: empty grid"]);
    }

    #[test]
    fn test_parse_error_is_transparent_in_solve_error() {
        let error = SolveError::from(ParseError::MissingData("no digits".into()));
        assert_eq!(error.to_string(), "Missing data: no digits");
    }
}
