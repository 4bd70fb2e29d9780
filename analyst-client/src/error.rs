//! Error types for the analysis client

use thiserror::Error;

/// Errors that can occur while submitting a document
///
/// Submission is a single network call; every failure here is terminal for
/// that call and no retry is attempted at this layer.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The document failed local validation before any network call
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// The network call itself failed
    #[error("HTTP request failed: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("upload rejected (status {status}): {message}")]
    RejectedByServer {
        /// HTTP status code
        status: u16,
        /// Response body, if the service sent one
        message: String,
    },
}

impl SubmissionError {
    /// Create a rejection error from status code and message
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::RejectedByServer {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::RejectedByServer { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::RejectedByServer { status, .. } if *status >= 500)
    }
}

/// Errors that can occur while polling for a report
///
/// "Not ready yet" is not represented here: a pending job simply triggers the
/// next poll cycle. Everything below ends the resolve call.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The poll policy failed validation
    #[error("invalid poll policy: {0}")]
    InvalidPolicy(String),

    /// A poll attempt failed at the network level
    #[error("HTTP request failed: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// The status endpoint answered with a non-2xx status
    #[error("status query rejected (status {status}): {message}")]
    RejectedByServer {
        /// HTTP status code
        status: u16,
        /// Response body, if the service sent one
        message: String,
    },

    /// The status endpoint answered with a body the client cannot decode
    #[error("failed to parse status response: {0}")]
    MalformedResponse(String),

    /// The attempt or time budget ran out before the report appeared
    #[error("no report after {attempts} poll attempt(s)")]
    DeadlineExceeded {
        /// Poll attempts made before giving up
        attempts: u32,
    },

    /// The caller cancelled the resolve call
    #[error("resolve cancelled by caller")]
    Cancelled,
}
