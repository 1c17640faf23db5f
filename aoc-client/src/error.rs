//! Error types for the puzzle service client

use thiserror::Error;

/// Errors that can occur when talking to the puzzle service
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status received
    #[error("{endpoint} returned HTTP {status}")]
    InvalidStatus {
        /// What was being requested (e.g. "input for 2024/1")
        endpoint: String,
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Response HTML lacks the expected element
    #[error("Failed to parse HTML response: no <{0}> element")]
    HtmlParse(&'static str),

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
