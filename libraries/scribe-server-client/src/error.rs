//! Error types for the Scribe panel client.

use thiserror::Error;

/// Errors that can occur when talking to the Scribe backend.
///
/// Every failure is terminal for the call that raised it; there are no
/// retries. Callers at the page boundary either redirect (on
/// [`ClientError::Unauthenticated`]) or log and degrade to an empty result.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not complete (transport-level failure)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Session is missing or expired (HTTP 401)
    #[error("Not authenticated: session missing or expired")]
    Unauthenticated,

    /// Login was rejected by the server
    #[error("Login failed: {0}")]
    LoginFailed(String),

    /// Server returned a non-success status other than 401
    #[error("Server error ({status}): {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body was not the JSON the endpoint promises
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// A custom credential header could not be constructed
    #[error("Invalid credential header: {0}")]
    InvalidHeader(String),
}

/// Result type for panel client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
