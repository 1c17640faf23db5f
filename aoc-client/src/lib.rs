//! Advent of Code HTTP Client Library
//!
//! Blocking client for the puzzle service: session validation, puzzle
//! input fetching, example scraping and answer submission.
//!
//! # Features
//!
//! - Session validation returning the account's user ID
//! - Puzzle input fetching for any year and day
//! - Example input and expected answers scraped from the puzzle page
//! - Answer submission with classified feedback
//! - Secure TLS using rustls (no OpenSSL dependencies)
//!
//! # Example
//!
//! ```no_run
//! use aoc_client::{AocClient, SubmissionResult};
//! use aoc_runner::Part;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let session = "your_session_cookie_here";
//!
//! let session_info = client.verify_session(session)?;
//! if let Some(user_id) = session_info.user_id {
//!     println!("Session is valid! User ID: {}", user_id);
//! }
//!
//! let input = client.get_input(2024, 1, session)?;
//!
//! match client.submit_answer(2024, 1, Part::A, "42", session)? {
//!     SubmissionResult::Correct => println!("Correct!"),
//!     SubmissionResult::Incorrect => println!("Incorrect"),
//!     SubmissionResult::AlreadyCompleted => println!("Already done"),
//!     SubmissionResult::Throttled { wait_time } => {
//!         println!("Throttled: {:?}", wait_time);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder, ExampleCase, SessionInfo, SubmissionResult};
pub use error::AocError;
