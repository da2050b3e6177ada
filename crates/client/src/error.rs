//! Error types for the Splunk search client.
//!
//! Responsibilities:
//! - Name the protocol stage that failed (login, submission, polling, fetching).
//! - Carry a human-readable detail string from the backend or transport layer.
//!
//! Does NOT handle:
//! - Rendering errors for tool output (see the server crate's formatter).
//! - Retry decisions. Failures propagate immediately.
//!
//! Invariants:
//! - A search run only ever fails with one of the six stage kinds; `InvalidRequest`
//!   and `InvalidUrl` are raised before any network activity.

use std::fmt;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the Splunk management API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Login exchange failed or the backend was unreachable during login.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Job creation was rejected or the response carried no job id.
    #[error("Search submission failed: {0}")]
    Submission(String),

    /// The job was still running after the whole status-check budget was used.
    #[error("Search job {sid} did not complete after {attempts} status checks")]
    PollTimeout { sid: String, attempts: u32 },

    /// A job status response could not be understood.
    #[error("Invalid status response for job {sid}: {message}")]
    PollParse { sid: String, message: String },

    /// A results (or listing) response could not be understood.
    #[error("Invalid results response: {0}")]
    ResultParse(String),

    /// Connection failure or non-success status outside of login and submission.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The search request failed validation before anything was sent.
    #[error("Invalid search request: {0}")]
    InvalidRequest(String),

    /// The configured endpoint could not be turned into a usable client.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Discriminant of [`ClientError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Authentication,
    Submission,
    PollTimeout,
    PollParse,
    ResultParse,
    Transport,
    InvalidRequest,
    InvalidUrl,
}

impl ErrorKind {
    /// Stable snake_case name, suitable for structured log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::Submission => "submission",
            Self::PollTimeout => "poll_timeout",
            Self::PollParse => "poll_parse",
            Self::ResultParse => "result_parse",
            Self::Transport => "transport",
            Self::InvalidRequest => "invalid_request",
            Self::InvalidUrl => "invalid_url",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ClientError {
    /// Which stage produced this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Submission(_) => ErrorKind::Submission,
            Self::PollTimeout { .. } => ErrorKind::PollTimeout,
            Self::PollParse { .. } => ErrorKind::PollParse,
            Self::ResultParse(_) => ErrorKind::ResultParse,
            Self::Transport(_) => ErrorKind::Transport,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::InvalidUrl(_) => ErrorKind::InvalidUrl,
        }
    }
}
