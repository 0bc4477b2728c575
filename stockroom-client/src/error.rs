//! Client error types

use thiserror::Error;

/// Client error type
///
/// The taxonomy is deliberately flat: any transport, decode, or non-2xx
/// outcome is a failure. Callers log it and keep their previous state.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, transport, or response-decode failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
