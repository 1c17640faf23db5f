//! Puzzle service HTTP client implementation

use crate::error::AocError;
use crate::parser::ResponseParser;
use aoc_runner::Part;
use reqwest::blocking::Response;
use reqwest::header::HeaderValue;
use std::time::Duration;
use tracing::debug;
use zeroize::Zeroize;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Result of session verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// User ID if session is valid, None otherwise
    pub user_id: Option<u64>,
}

/// Result of an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Answer was correct
    Correct,
    /// Answer was incorrect
    Incorrect,
    /// The part was already solved
    AlreadyCompleted,
    /// Submission was throttled
    Throttled {
        /// Optional wait time before next submission
        wait_time: Option<Duration>,
    },
}

/// An example published on a puzzle page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleCase {
    /// Example input text
    pub input: String,
    /// Expected answer for part a, if published
    pub answer_a: Option<String>,
    /// Expected answer for part b, if published
    pub answer_b: Option<String>,
}

impl ExampleCase {
    /// Expected answer for `part`, if any
    pub fn expected(&self, part: Part) -> Option<&str> {
        match part {
            Part::A => self.answer_a.as_deref(),
            Part::B => self.answer_b.as_deref(),
        }
    }
}

/// Blocking client for the puzzle service
///
/// # Example
///
/// ```no_run
/// use aoc_client::AocClient;
/// use aoc_runner::Part;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let input = client.get_input(2024, 1, session)?;
/// let examples = client.get_examples(2024, 1, session)?;
/// println!("{} bytes of input, {} example(s)", input.len(), examples.len());
///
/// let outcome = client.submit_answer(2024, 1, Part::A, "42", session)?;
/// println!("{:?}", outcome);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a client for the public site with rustls and no redirect following
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Cookie header marked sensitive; the temporary string is zeroized
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes());
        cookie_string.zeroize();

        let mut header_value = header_value
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()))?;
        header_value.set_sensitive(true);
        Ok(header_value)
    }

    fn url(&self, segments: &[&str]) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, segments: &[&str], session: &str) -> Result<Response, AocError> {
        let url = self.url(segments)?;
        debug!(%url, "GET");
        Ok(self
            .client
            .get(url)
            .header("Cookie", Self::create_cookie_header(session)?)
            .send()?)
    }

    fn ensure_success(response: Response, endpoint: String) -> Result<Response, AocError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(AocError::InvalidStatus {
                endpoint,
                status: response.status(),
            })
        }
    }

    /// Check a session cookie and retrieve the user ID
    ///
    /// A 2xx from the settings page means the session is valid; anything
    /// else (redirect to the homepage, error) means it isn't.
    pub fn verify_session(&self, session: &str) -> Result<SessionInfo, AocError> {
        let response = self.get(&["settings"], session)?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "session rejected");
            return Ok(SessionInfo { user_id: None });
        }

        let html = response.text().map_err(|_| AocError::Encoding)?;
        Ok(SessionInfo {
            user_id: self.parser.extract_user_id(&html),
        })
    }

    /// Fetch the personal puzzle input for a year and day, byte for byte
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let (year_str, day_str) = (year.to_string(), day.to_string());
        let response = self.get(&[&year_str, "day", &day_str, "input"], session)?;
        Self::ensure_success(response, format!("input for {}/{}", year, day))?
            .text()
            .map_err(|_| AocError::Encoding)
    }

    /// Fetch the puzzle description page
    pub fn get_puzzle_page(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let (year_str, day_str) = (year.to_string(), day.to_string());
        let response = self.get(&[&year_str, "day", &day_str], session)?;
        Self::ensure_success(response, format!("puzzle page for {}/{}", year, day))?
            .text()
            .map_err(|_| AocError::Encoding)
    }

    /// Fetch the puzzle page and scrape its example, if it has one
    pub fn get_examples(
        &self,
        year: u16,
        day: u8,
        session: &str,
    ) -> Result<Vec<ExampleCase>, AocError> {
        let html = self.get_puzzle_page(year, day, session)?;
        let examples = self.parser.parse_examples(&html);
        debug!(year, day, count = examples.len(), "scraped examples");
        Ok(examples)
    }

    /// Submit an answer for one part
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error
    /// * `AocError::Encoding` - Response is not valid UTF-8
    /// * `AocError::HtmlParse` - Response has no `<main>` element
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: Part,
        answer: &str,
        session: &str,
    ) -> Result<SubmissionResult, AocError> {
        let (year_str, day_str) = (year.to_string(), day.to_string());
        let url = self.url(&[&year_str, "day", &day_str, "answer"])?;
        let form = [("level", part.level().to_string()), ("answer", answer.to_string())];
        debug!(%url, %part, "POST answer");

        let response = self
            .client
            .post(url)
            .header("Cookie", Self::create_cookie_header(session)?)
            .form(&form)
            .send()?;
        let response = Self::ensure_success(response, format!("answer for {}/{}", year, day))?;

        let html = response.text().map_err(|_| AocError::Encoding)?;
        self.parser.parse_submission_response(&html)
    }
}

/// Builder for configuring an [`AocClient`]
///
/// The redirect policy is always forced to `none`, which session
/// verification relies on.
///
/// ```no_run
/// use aoc_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(reqwest::blocking::Client::builder().timeout(Duration::from_secs(10)))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL (e.g. a mock server)
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, ...)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}
