//! The solve pipeline: validate examples, run on the real input, report and
//! optionally submit

use crate::error::CliError;
use crate::report::{ExampleOutcome, Reporter};
use crate::source::{AnswerSubmitter, PuzzleSource};
use aoc_client::{ExampleCase, SubmissionResult};
use aoc_runner::{ExecutionResult, Part, SolverRegistry};
use std::io::Write;
use tracing::debug;

/// What a `solve` invocation should do
#[derive(Debug, Clone, Copy)]
pub struct SolveRequest {
    pub year: u16,
    pub day: u8,
    pub part: Part,
    pub submit: bool,
    pub skip_examples: bool,
}

pub struct Harness<'r, W: Write> {
    registry: &'r SolverRegistry,
    reporter: Reporter<W>,
}

impl<'r, W: Write> Harness<'r, W> {
    pub fn new(registry: &'r SolverRegistry, reporter: Reporter<W>) -> Self {
        Self { registry, reporter }
    }

    #[cfg(test)]
    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }

    /// Run every example with an expected answer for `part` and report each
    /// one. Fails with [`CliError::ExamplesFailed`] once all have been tried.
    pub fn validate_examples(
        &mut self,
        year: u16,
        day: u8,
        part: Part,
        examples: &[ExampleCase],
    ) -> Result<(), CliError> {
        if examples.is_empty() {
            self.reporter.no_examples();
            return Ok(());
        }

        self.reporter.examples_started(examples.len(), part);
        let mut failed = 0;
        for (index, example) in examples.iter().enumerate() {
            let outcome = match example.expected(part) {
                None => ExampleOutcome::Skipped,
                Some(expected) => match self.registry.run(year, day, part, &example.input) {
                    Ok(answer) if answer == expected => ExampleOutcome::Passed { answer },
                    Ok(got) => ExampleOutcome::Failed {
                        expected: expected.to_string(),
                        got,
                    },
                    Err(e) => ExampleOutcome::Error(e.to_string()),
                },
            };
            if matches!(outcome, ExampleOutcome::Failed { .. } | ExampleOutcome::Error(_)) {
                failed += 1;
            }
            self.reporter.example(index + 1, part, &outcome);
        }

        if failed > 0 {
            return Err(CliError::ExamplesFailed {
                failed,
                total: examples.len(),
            });
        }
        self.reporter.examples_passed();
        Ok(())
    }

    /// Run one part on `input` and report the answer
    pub fn execute(
        &mut self,
        label: &str,
        year: u16,
        day: u8,
        part: Part,
        input: &str,
    ) -> Result<ExecutionResult, CliError> {
        let result = self.registry.run_timed(year, day, part, input)?;
        self.reporter.result(label, year, day, part, &result);
        Ok(result)
    }

    /// Submit `answer` and map the outcome: correct and already completed
    /// succeed, anything else is an error
    pub fn submit(
        &mut self,
        submitter: &impl AnswerSubmitter,
        year: u16,
        day: u8,
        part: Part,
        answer: &str,
    ) -> Result<SubmissionResult, CliError> {
        self.reporter.submitting(year, day, part);
        let outcome = submitter.submit(year, day, part, answer)?;
        debug!(year, day, %part, ?outcome, "submission outcome");
        self.reporter.submission(&outcome);

        let reason = match &outcome {
            SubmissionResult::Correct | SubmissionResult::AlreadyCompleted => return Ok(outcome),
            SubmissionResult::Incorrect => "incorrect".to_string(),
            SubmissionResult::Throttled { wait_time: Some(wait) } => {
                format!("throttled, retry in {}s", wait.as_secs())
            }
            SubmissionResult::Throttled { wait_time: None } => "throttled".to_string(),
        };
        Err(CliError::SubmissionRejected {
            part,
            answer: answer.to_string(),
            reason,
        })
    }

    /// Fail with `NotFound`/`MissingEntryPoint` unless `part` can be run,
    /// without invoking anything
    pub fn ensure_runnable(&self, year: u16, day: u8, part: Part) -> Result<(), CliError> {
        if self.registry.info(year, day).is_some_and(|info| info.has(part)) {
            return Ok(());
        }
        // The lookup fails before any entry point is called
        self.registry.run(year, day, part, "")?;
        Ok(())
    }

    /// The full `solve` pipeline. The real input is only fetched once the
    /// examples pass.
    pub fn solve<S>(&mut self, source: &S, request: SolveRequest) -> Result<(), CliError>
    where
        S: PuzzleSource + AnswerSubmitter,
    {
        let SolveRequest {
            year,
            day,
            part,
            submit,
            skip_examples,
        } = request;

        self.ensure_runnable(year, day, part)?;

        if !skip_examples {
            let examples = source.examples(year, day)?;
            self.validate_examples(year, day, part, &examples)?;
        }

        self.reporter.fetching_input(year, day);
        let input = source.input(year, day)?;
        let result = self.execute("Answer", year, day, part, &input)?;

        if submit {
            self.submit(source, year, day, part, &result.answer)?;
        }
        Ok(())
    }
}
