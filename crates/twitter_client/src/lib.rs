//! # Twitter Client Library
//!
//! A client library for the X/Twitter v2 REST API, focused on the
//! follow-graph operations FollowSweep needs: resolving users by handle,
//! listing followers and followed accounts page by page, and removing
//! follow edges.
//!
//! ## Features
//!
//! - Bearer-token authentication on every request
//! - Typed models for user objects and list pages
//! - Uniform mapping of HTTP failures onto [`Error`]
//! - A trait seam ([`FollowGraphClient`]) so consumers can substitute
//!   test doubles for the real client
//!
//! ## Example
//!
//! ```rust,no_run
//! use twitter_client::{FollowGraphClient, TwitterClient};
//!
//! # async fn example() -> Result<(), twitter_client::Error> {
//! let client = TwitterClient::new("my-bearer-token")?;
//! if let Some(user) = client.user_by_username("XDevelopers").await? {
//!     println!("{} has id {}", user.username, user.id);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use url::Url;

pub mod errors;
pub mod models;

pub use errors::Error;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Production endpoint of the X/Twitter v2 REST API.
pub const API_BASE_URL: &str = "https://api.twitter.com";

/// User fields requested on every call that returns user objects.
///
/// The v2 API returns only `id`, `name` and `username` unless further
/// fields are requested explicitly.
const USER_FIELDS: &str =
    "name,username,profile_image_url,description,verified,protected,public_metrics";

/// Trait defining the follow-graph operations used by FollowSweep.
///
/// This abstraction allows for dependency injection and easier testing by
/// providing a common interface for the API operations the follower
/// workflows need. [`TwitterClient`] is the production implementation;
/// tests substitute scripted doubles.
#[async_trait]
pub trait FollowGraphClient: Send + Sync {
    /// Looks up a user by their @-handle.
    ///
    /// Returns `Ok(None)` when the service reports no user for the handle.
    async fn user_by_username(&self, username: &str) -> Result<Option<models::User>, Error>;

    /// Removes the follow edge from `account_id` to `target_id`.
    ///
    /// The returned [`models::FollowUpdate`] reflects the state of the
    /// edge after the call.
    async fn unfollow(
        &self,
        account_id: &str,
        target_id: &str,
    ) -> Result<models::FollowUpdate, Error>;

    /// Fetches one page of the accounts following `account_id`.
    ///
    /// `cursor` is the continuation token from a previous page, or `None`
    /// for the first page.
    async fn followers_page(
        &self,
        account_id: &str,
        page_size: u32,
        cursor: Option<&str>,
    ) -> Result<models::UserPage, Error>;

    /// Fetches the first page of the accounts `user_id` follows.
    async fn following_page(&self, user_id: &str, page_size: u32)
        -> Result<models::UserPage, Error>;
}

/// A client for the X/Twitter v2 REST API.
///
/// Wraps a [`reqwest::Client`] with bearer-token authentication, the
/// base-URL handling needed to point tests at a mock server, and the
/// response decoding shared by every endpoint.
#[derive(Debug)]
pub struct TwitterClient {
    http: reqwest::Client,
    base_url: Url,
    bearer_token: SecretString,
}

impl TwitterClient {
    /// Creates a new client for the production API.
    ///
    /// # Arguments
    ///
    /// * `bearer_token` - OAuth 2.0 bearer token with user context
    ///
    /// # Errors
    ///
    /// Returns `Error::AuthError` if the token is empty.
    pub fn new(bearer_token: &str) -> Result<Self, Error> {
        Self::with_base_url(bearer_token, API_BASE_URL)
    }

    /// Creates a new client against a non-default base URL.
    ///
    /// Intended for tests (pointing at a local mock server) and proxied
    /// deployments.
    ///
    /// # Errors
    ///
    /// Returns `Error::AuthError` if the token is empty and
    /// `Error::InvalidUrl` if `base_url` does not parse.
    pub fn with_base_url(bearer_token: &str, base_url: &str) -> Result<Self, Error> {
        if bearer_token.trim().is_empty() {
            return Err(Error::AuthError(
                "Bearer token must not be empty".to_string(),
            ));
        }
        let base_url =
            Url::parse(base_url).map_err(|error| Error::InvalidUrl(format!("{base_url}: {error}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            bearer_token: SecretString::from(bearer_token),
        })
    }

    /// Fetches the profile of the account that owns the bearer token.
    ///
    /// Session setup uses this to resolve the signed-in account id once.
    ///
    /// # Errors
    ///
    /// Returns `Error::AuthError` when the token is rejected and
    /// `Error::InvalidResponse` when the response carries no user payload.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<models::User, Error> {
        debug!("Resolving the authenticated account");
        let envelope: models::DataEnvelope<models::User> = self
            .get_json("/2/users/me", &[("user.fields", USER_FIELDS.to_string())])
            .await?;
        envelope.data.ok_or(Error::InvalidResponse)
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|error| Error::InvalidUrl(format!("{path}: {error}")))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(self.bearer_token.expose_secret())
            .send()
            .await?;
        Self::decode(path, response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .delete(url)
            .bearer_auth(self.bearer_token.expose_secret())
            .send()
            .await?;
        Self::decode(path, response).await
    }

    /// Reads the response body and turns it into the expected payload.
    ///
    /// The body is fetched as text first so that non-success statuses can
    /// surface the service's error message instead of a decoding failure.
    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log_api_failure(path, status, &body);
            return Err(error_from_status(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FollowGraphClient for TwitterClient {
    #[instrument(skip(self))]
    async fn user_by_username(&self, username: &str) -> Result<Option<models::User>, Error> {
        debug!("Looking up user by username");
        let envelope: models::DataEnvelope<models::User> = self
            .get_json(
                &format!("/2/users/by/username/{username}"),
                &[("user.fields", USER_FIELDS.to_string())],
            )
            .await?;
        Ok(envelope.data)
    }

    #[instrument(skip(self))]
    async fn unfollow(
        &self,
        account_id: &str,
        target_id: &str,
    ) -> Result<models::FollowUpdate, Error> {
        debug!("Removing follow edge");
        let envelope: models::DataEnvelope<models::FollowUpdate> = self
            .delete_json(&format!("/2/users/{account_id}/following/{target_id}"))
            .await?;
        envelope.data.ok_or(Error::InvalidResponse)
    }

    #[instrument(skip(self))]
    async fn followers_page(
        &self,
        account_id: &str,
        page_size: u32,
        cursor: Option<&str>,
    ) -> Result<models::UserPage, Error> {
        debug!("Fetching a page of followers");
        let mut query = vec![
            ("max_results", page_size.to_string()),
            ("user.fields", USER_FIELDS.to_string()),
        ];
        if let Some(token) = cursor {
            query.push(("pagination_token", token.to_string()));
        }
        let envelope: models::UserListEnvelope = self
            .get_json(&format!("/2/users/{account_id}/followers"), &query)
            .await?;
        Ok(models::UserPage::from(envelope))
    }

    #[instrument(skip(self))]
    async fn following_page(
        &self,
        user_id: &str,
        page_size: u32,
    ) -> Result<models::UserPage, Error> {
        debug!("Fetching a page of followed accounts");
        let envelope: models::UserListEnvelope = self
            .get_json(
                &format!("/2/users/{user_id}/following"),
                &[
                    ("max_results", page_size.to_string()),
                    ("user.fields", USER_FIELDS.to_string()),
                ],
            )
            .await?;
        Ok(models::UserPage::from(envelope))
    }
}

/// Maps a non-success HTTP status onto the matching [`Error`] variant.
fn error_from_status(status: StatusCode, body: &str) -> Error {
    match status {
        StatusCode::UNAUTHORIZED => Error::AuthError(api_error_message(body)),
        StatusCode::NOT_FOUND => Error::NotFound,
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimitExceeded,
        _ => Error::Api {
            status: status.as_u16(),
            message: api_error_message(body),
        },
    }
}

/// Extracts a human-readable message from a v2 error body.
///
/// Error payloads come in two shapes: `{"title": ..., "detail": ...}` for
/// request-level problems and `{"errors": [{"message": ...}]}` for
/// endpoint-level ones. Falls back to the raw body when neither matches.
fn api_error_message(body: &str) -> String {
    let parsed: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return body.trim().to_string(),
    };
    parsed
        .get("detail")
        .or_else(|| parsed.get("title"))
        .or_else(|| parsed.pointer("/errors/0/message"))
        .or_else(|| parsed.pointer("/errors/0/detail"))
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| body.trim().to_string())
}

/// Logs API failures with detail appropriate to the status.
fn log_api_failure(path: &str, status: StatusCode, body: &str) {
    match status {
        StatusCode::UNAUTHORIZED => {
            error!(path, "Request was rejected as unauthenticated");
        }
        StatusCode::TOO_MANY_REQUESTS => {
            error!(path, "Rate limit exhausted for endpoint");
        }
        StatusCode::NOT_FOUND => {
            debug!(path, "Resource not found");
        }
        _ => {
            error!(
                path,
                status = status.as_u16(),
                message = %api_error_message(body),
                "API request failed"
            );
        }
    }
}
