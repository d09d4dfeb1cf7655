//! Error types for X/Twitter API operations.
//!
//! This module defines the error types used throughout the twitter_client
//! crate for handling various failure scenarios when interacting with the
//! X/Twitter v2 REST API.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during X/Twitter API operations.
///
/// This enum covers the failure modes encountered when making requests
/// against the v2 REST API, from transport problems to malformed payloads.
///
/// # Examples
///
/// ```rust
/// use twitter_client::errors::Error;
///
/// fn handle_error(error: Error) {
///     match error {
///         Error::AuthError(message) => {
///             eprintln!("Check the bearer token: {}", message);
///         }
///         Error::RateLimitExceeded => {
///             eprintln!("Back off and retry later");
///         }
///         other => {
///             eprintln!("API operation failed: {}", other);
///         }
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// The API rejected the request with an unexpected status code.
    ///
    /// Carries the HTTP status and the message extracted from the error
    /// payload, if any.
    #[error("API request failed with status {status}: {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Human-readable message extracted from the response body.
        message: String,
    },

    /// Authentication failed.
    ///
    /// The service did not accept the bearer token, or no usable token was
    /// provided when the client was created.
    #[error("Failed to authenticate with the Twitter API: {0}")]
    AuthError(String),

    /// Error deserializing a response body.
    #[error("Failed to deserialize Twitter response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The API returned a successful status but the payload did not have
    /// the expected shape.
    #[error("Invalid response format")]
    InvalidResponse,

    /// A request URL could not be constructed from the configured base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The requested resource was not found.
    #[error("Resource not found")]
    NotFound,

    /// Rate limit for the endpoint has been exhausted.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The HTTP request itself failed before a response was received.
    ///
    /// Connection refusals, DNS failures and timeouts all surface here.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
