//! Plain-text reporting of harness progress and results

use aoc_client::SubmissionResult;
use aoc_runner::{ExecutionResult, Part, UnitInfo};
use chrono::Local;
use std::io::{self, Write};
use std::time::Duration;

/// Outcome of running one example
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleOutcome {
    Passed { answer: String },
    Failed { expected: String, got: String },
    Error(String),
    Skipped,
}

/// Writes user-facing output
///
/// In quiet mode only the answer (and `list` rows) are written. Write
/// failures on the output stream are ignored, as `println!` users expect.
pub struct Reporter<W: Write> {
    out: W,
    quiet: bool,
}

impl Reporter<io::Stdout> {
    pub fn stdout(quiet: bool) -> Self {
        Self::new(io::stdout(), quiet)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if !self.quiet {
            let _ = writeln!(self.out, "{}", text);
        }
    }

    pub fn fetching_input(&mut self, year: u16, day: u8) {
        self.line(format_args!("Fetching input for Year {}, Day {}...", year, day));
    }

    pub fn examples_started(&mut self, count: usize, part: Part) {
        self.line(format_args!("Running {} example(s) for Part {}...", count, part.letter().to_ascii_uppercase()));
    }

    pub fn no_examples(&mut self) {
        self.line(format_args!("No examples found for this puzzle"));
    }

    pub fn example(&mut self, index: usize, part: Part, outcome: &ExampleOutcome) {
        match outcome {
            ExampleOutcome::Passed { answer } => {
                self.line(format_args!("  Example {}: PASSED (got {})", index, answer))
            }
            ExampleOutcome::Failed { expected, got } => {
                self.line(format_args!("  Example {}: FAILED", index));
                self.line(format_args!("    Expected: {}", expected));
                self.line(format_args!("    Got:      {}", got));
            }
            ExampleOutcome::Error(message) => {
                self.line(format_args!("  Example {}: ERROR - {}", index, message))
            }
            ExampleOutcome::Skipped => self.line(format_args!(
                "  Example {}: No expected answer for part {}, skipping",
                index,
                part.letter().to_ascii_uppercase()
            )),
        }
    }

    pub fn examples_passed(&mut self) {
        self.line(format_args!("All examples passed!"));
    }

    /// Final answer of a run; the only line written in quiet mode
    pub fn result(&mut self, label: &str, year: u16, day: u8, part: Part, result: &ExecutionResult) {
        if self.quiet {
            let _ = writeln!(self.out, "{}", result.answer);
            return;
        }
        self.line(format_args!(
            "{} - Year {}, Day {}, Part {}: {}",
            label,
            year,
            day,
            part.letter().to_ascii_uppercase(),
            result.answer
        ));
        self.line(format_args!("Completed in {}", format_duration(result.elapsed)));
    }

    pub fn submitting(&mut self, year: u16, day: u8, part: Part) {
        self.line(format_args!("Submitting answer for Year {}, Day {}, Part {}...", year, day, part));
    }

    pub fn submission(&mut self, outcome: &SubmissionResult) {
        let submitted_at = Local::now().format("%H:%M:%S");
        self.line(format_args!("Submitted {}: {}", submitted_at, format_outcome(outcome)));
    }

    pub fn created(&mut self, path: &std::path::Path, year: u16, day: u8) {
        self.line(format_args!("Created solution file: {}", path.display()));
        self.line(format_args!("Run with: aoc solve {}/{}a", year, day));
    }

    /// One `list` row, written even in quiet mode
    pub fn unit(&mut self, info: &UnitInfo) {
        let parts: Vec<String> = Part::ALL
            .iter()
            .map(|&part| if info.has(part) { part.to_string() } else { "-".to_string() })
            .collect();
        let tags = if info.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", info.tags.join(", "))
        };
        let _ = writeln!(self.out, "{}/{:02}  {}{}", info.year, info.day, parts.join(" "), tags);
    }

    pub fn no_units(&mut self) {
        self.line(format_args!("No solutions found matching the specified filters."));
    }
}

/// Format a duration for display
pub fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

/// Format a submission outcome for display
fn format_outcome(outcome: &SubmissionResult) -> String {
    match outcome {
        SubmissionResult::Correct => "Correct! Answer accepted".to_string(),
        SubmissionResult::Incorrect => "Incorrect answer".to_string(),
        SubmissionResult::AlreadyCompleted => "Already completed, answer not checked".to_string(),
        SubmissionResult::Throttled { wait_time } => match wait_time {
            Some(d) => format!("Throttled (wait {})", humanize(*d)),
            None => "Throttled".to_string(),
        },
    }
}

fn humanize(d: Duration) -> String {
    let secs = d.as_secs();
    match (secs / 60, secs % 60) {
        (0, s) => format!("{}s", s),
        (m, 0) => format!("{}m", m),
        (m, s) => format!("{}m {}s", m, s),
    }
}
