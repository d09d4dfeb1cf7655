//! Data models for X/Twitter API objects.
//!
//! This module contains the data structures exchanged with the v2 REST
//! API: user objects as the service returns them, page containers for the
//! follow-graph listing endpoints, and the crate-private response
//! envelopes every v2 payload is wrapped in.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A user object as returned by the v2 API.
///
/// Only the fields this crate requests are modelled; anything else in the
/// payload is ignored during deserialization. `id`, `name` and `username`
/// are always present on a well-formed user object, the remaining fields
/// arrive only when the corresponding `user.fields` value was requested
/// and the account has data for them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct User {
    /// Opaque identifier of the account.
    pub id: String,
    /// Display name shown on the profile.
    pub name: String,
    /// The @-handle, without the leading `@`.
    pub username: String,
    /// Profile bio text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// HTTPS URL of the profile image. Absent (or empty) for accounts
    /// without a usable image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// Whether the account's posts are protected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
    /// Aggregate counters, present when `public_metrics` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metrics: Option<PublicMetrics>,
    /// Whether the account carries a verified badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// Aggregate public counters attached to a user object.
///
/// The service reports these as plain integers; each one is optional here
/// so partially populated payloads still deserialize.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PublicMetrics {
    /// Number of accounts following this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<u64>,
    /// Number of accounts this user follows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_count: Option<u64>,
    /// Number of public lists this user appears on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_count: Option<u64>,
    /// Number of posts this user has published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweet_count: Option<u64>,
}

/// One page of results from a follow-graph listing endpoint.
///
/// `users` is empty when the service returned a page without data, which
/// the listing endpoints do for accounts with nothing (left) to list.
/// `next_token` is the continuation cursor; it is absent on the last page.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UserPage {
    /// The page's entries, in the order the service returned them.
    pub users: Vec<User>,
    /// Cursor identifying the next page, absent when no further page
    /// exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Result of a follow-edge mutation: the remaining state of the edge.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FollowUpdate {
    /// True while the source account still follows the target.
    pub following: bool,
}

/// Response envelope wrapping a single payload object.
///
/// The v2 API wraps every response in an outer object; `data` is absent
/// when the request matched nothing, in which case the body carries an
/// `errors` array instead.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: Option<T>,
}

/// Response envelope wrapping a page of user objects.
#[derive(Debug, Deserialize)]
pub(crate) struct UserListEnvelope {
    pub data: Option<Vec<User>>,
    pub meta: Option<ListMeta>,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ListMeta {
    pub next_token: Option<String>,
}

impl From<UserListEnvelope> for UserPage {
    fn from(envelope: UserListEnvelope) -> Self {
        Self {
            users: envelope.data.unwrap_or_default(),
            next_token: envelope.meta.and_then(|meta| meta.next_token),
        }
    }
}
