//! Error types for the follower operations.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Result type for the follower operations.
pub type OpResult<T> = std::result::Result<T, Error>;

/// Errors surfaced by the follower operations.
///
/// Every variant renders as `<operation context>: <cause>`, so a caller
/// sees exactly one message naming the operation that failed (including
/// the username where one is involved) followed by the underlying cause.
/// Each operation wraps a failure exactly once; causes are never
/// double-prefixed.
#[derive(Debug, Error)]
pub enum Error {
    /// The session has no live client handle, or could not name the
    /// signed-in account.
    #[error("{context}: not authenticated")]
    NotAuthenticated {
        /// Operation description, e.g. `Failed to get followers`.
        context: String,
    },

    /// An underlying API call failed.
    #[error("{context}: {source}")]
    Remote {
        /// Operation description.
        context: String,
        /// The original client failure, preserved as the error source.
        #[source]
        source: twitter_client::Error,
    },

    /// A username lookup returned no user.
    #[error("{context}: no user found for @{username}")]
    UserNotFound {
        /// Operation description.
        context: String,
        /// The handle that failed to resolve.
        username: String,
    },
}
