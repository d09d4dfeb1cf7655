//! Bearer-token session implementation.
//!
//! Provides the shipped [`UserSession`] implementation, backed by an
//! OAuth 2.0 bearer token with user context.

use async_trait::async_trait;
use tracing::{debug, instrument};
use twitter_client::{Error as ClientError, FollowGraphClient, TwitterClient};

use crate::{CurrentAccount, SessionError, SessionResult, UserSession};

#[cfg(test)]
#[path = "bearer_session_tests.rs"]
mod tests;

/// Environment variable read by [`BearerSession::connect_from_env`].
pub const BEARER_TOKEN_VAR: &str = "TWITTER_BEARER_TOKEN";

/// Session backed by a bearer token.
///
/// The signed-in account is resolved once, when the session is created;
/// afterwards `client_handle` and `current_account` answer without further
/// network traffic. A constructed `BearerSession` is therefore always
/// signed in, and both [`UserSession`] accessors always return `Some`.
#[derive(Debug)]
pub struct BearerSession {
    client: TwitterClient,
    account_id: String,
}

impl BearerSession {
    /// Connects with the given bearer token against the production API.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCredentials` when the service rejects
    /// the token and `SessionError::TwitterError` when the account lookup
    /// fails for any other reason.
    pub async fn connect(bearer_token: &str) -> SessionResult<Self> {
        let client = TwitterClient::new(bearer_token).map_err(connect_error)?;
        Self::resolve(client).await
    }

    /// Connects against a non-default base URL.
    ///
    /// Intended for tests and proxied deployments; behaves like
    /// [`BearerSession::connect`] otherwise.
    pub async fn connect_with_base_url(bearer_token: &str, base_url: &str) -> SessionResult<Self> {
        let client = TwitterClient::with_base_url(bearer_token, base_url).map_err(connect_error)?;
        Self::resolve(client).await
    }

    /// Connects with the token from the `TWITTER_BEARER_TOKEN` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Other` when the variable is unset, otherwise
    /// behaves like [`BearerSession::connect`].
    pub async fn connect_from_env() -> SessionResult<Self> {
        let token = std::env::var(BEARER_TOKEN_VAR).map_err(|_| {
            SessionError::Other(format!("{BEARER_TOKEN_VAR} environment variable not set"))
        })?;
        Self::connect(&token).await
    }

    /// Builds a session from an existing client and an already-resolved
    /// account id, skipping the account lookup round trip.
    pub fn from_parts(client: TwitterClient, account_id: String) -> Self {
        Self { client, account_id }
    }

    /// The id of the account this session is signed in as.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    #[instrument(skip(client))]
    async fn resolve(client: TwitterClient) -> SessionResult<Self> {
        let me = client.me().await.map_err(connect_error)?;
        debug!(account_id = %me.id, "Session established");
        Ok(Self {
            client,
            account_id: me.id,
        })
    }
}

#[async_trait]
impl UserSession for BearerSession {
    fn client_handle(&self) -> Option<&dyn FollowGraphClient> {
        Some(&self.client)
    }

    async fn current_account(&self) -> Option<CurrentAccount> {
        Some(CurrentAccount {
            account_id: self.account_id.clone(),
        })
    }
}

fn connect_error(error: ClientError) -> SessionError {
    match error {
        ClientError::AuthError(_) => SessionError::InvalidCredentials,
        other => SessionError::TwitterError(other.to_string()),
    }
}
