//! Where the harness gets puzzle data from and sends answers to

use crate::cache::InputCache;
use crate::config::Credentials;
use crate::error::CliError;
use aoc_client::{AocClient, ExampleCase, SubmissionResult};
use aoc_runner::Part;
use tracing::{debug, warn};

/// Supplies the example cases and the personal input of a puzzle
pub trait PuzzleSource {
    fn examples(&self, year: u16, day: u8) -> Result<Vec<ExampleCase>, CliError>;

    fn input(&self, year: u16, day: u8) -> Result<String, CliError>;
}

/// Sends an answer for one part of a puzzle
pub trait AnswerSubmitter {
    fn submit(&self, year: u16, day: u8, part: Part, answer: &str)
    -> Result<SubmissionResult, CliError>;
}

/// The puzzle service, with inputs cached on disk per user
pub struct RemotePuzzle {
    client: AocClient,
    cache: InputCache,
    credentials: Credentials,
}

impl RemotePuzzle {
    pub fn new(client: AocClient, cache: InputCache, credentials: Credentials) -> Self {
        Self {
            client,
            cache,
            credentials,
        }
    }
}

impl PuzzleSource for RemotePuzzle {
    fn examples(&self, year: u16, day: u8) -> Result<Vec<ExampleCase>, CliError> {
        Ok(self
            .client
            .get_examples(year, day, &self.credentials.session)?)
    }

    fn input(&self, year: u16, day: u8) -> Result<String, CliError> {
        if let Some(input) = self.cache.get(year, day)? {
            return Ok(input);
        }

        let input = self
            .client
            .get_input(year, day, &self.credentials.session)?;
        debug!(year, day, bytes = input.len(), "fetched input");

        // A failed write only costs a refetch next time
        if let Err(e) = self.cache.put(year, day, &input) {
            warn!(year, day, error = %e, "failed to cache input");
        }
        Ok(input)
    }
}

impl AnswerSubmitter for RemotePuzzle {
    fn submit(
        &self,
        year: u16,
        day: u8,
        part: Part,
        answer: &str,
    ) -> Result<SubmissionResult, CliError> {
        Ok(self
            .client
            .submit_answer(year, day, part, answer, &self.credentials.session)?)
    }
}
