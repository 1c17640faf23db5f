//! Result of running an entry point

use std::time::Duration;

/// Answer produced by one entry point invocation, with its timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The answer, already normalised to a string
    pub answer: String,
    /// Wall-clock time spent inside the entry point
    pub elapsed: Duration,
}
