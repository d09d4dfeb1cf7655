//! # Session Handler
//!
//! Session management for FollowSweep.
//!
//! This crate owns the question "who is signed in, and with what client?".
//! The follower operations in `follow_sweep_core` never hold credentials
//! themselves; they receive a [`UserSession`] and ask it for two things: a
//! ready-to-use API client and the identity of the signed-in account.
//!
//! [`BearerSession`] is the shipped implementation, backed by an OAuth 2.0
//! bearer token with user context. Hosts with their own credential
//! handling (token refresh, multi-account switching) implement
//! [`UserSession`] over whatever state they keep.

use async_trait::async_trait;
use twitter_client::FollowGraphClient;

mod bearer_session;

pub use bearer_session::{BEARER_TOKEN_VAR, BearerSession};

/// Result type for session operations.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while establishing a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The service rejected the supplied credentials.
    #[error("Invalid credentials provided")]
    InvalidCredentials,

    /// A Twitter API call made during session setup failed.
    #[error("Twitter API error: {0}")]
    TwitterError(String),

    /// Any other session failure, such as missing configuration.
    #[error("Session error: {0}")]
    Other(String),
}

/// The identity of the signed-in account.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurrentAccount {
    /// Opaque id of the authenticated account.
    pub account_id: String,
}

/// Trait defining what an authenticated session must provide.
///
/// Both accessors answer with `Option` rather than erroring: a session
/// that is signed out (or has lost track of its account) simply has
/// nothing to hand out, and callers turn that into their own error with
/// the context of whatever operation they were attempting.
#[async_trait]
pub trait UserSession: Send + Sync {
    /// A ready-to-use API client, or `None` when the session is signed out.
    fn client_handle(&self) -> Option<&dyn FollowGraphClient>;

    /// The signed-in account's identity, or `None` when it cannot be
    /// resolved.
    async fn current_account(&self) -> Option<CurrentAccount>;
}
