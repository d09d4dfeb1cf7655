//! Normalized user profiles.
//!
//! Every follower operation returns users in the shape defined here,
//! built once from the raw v2 user object and never mutated afterwards.

use serde::{Deserialize, Serialize};
use twitter_client::models::User;

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;

/// Placeholder served when an account has no usable profile image.
pub const DEFAULT_PROFILE_IMAGE_URL: &str =
    "https://abs.twimg.com/sticky/default_profile_images/default_profile_normal.png";

/// A normalized user profile.
///
/// Identity fields (`id`, `screen_name`, `name`) are always populated.
/// `profile_image_url` is never empty; when the source payload has no
/// image (or an empty one) it carries [`DEFAULT_PROFILE_IMAGE_URL`]. The
/// remaining fields stay unset when the service omitted them, so callers
/// can tell "not reported" apart from a real value.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserProfile {
    /// Opaque identifier of the account.
    pub id: String,
    /// The @-handle, without the leading `@`.
    pub screen_name: String,
    /// Display name shown on the profile.
    pub name: String,
    /// Profile image URL, never empty.
    pub profile_image_url: String,
    /// Profile bio, when the account has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Verified badge, when the service reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Protected-account flag, when the service reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,
    /// Follower count, when public metrics were included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<u64>,
    /// Count of accounts the user follows, when public metrics were
    /// included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friends_count: Option<u64>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let metrics = user.public_metrics;
        Self {
            id: user.id,
            screen_name: user.username,
            name: user.name,
            profile_image_url: user
                .profile_image_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE_URL.to_string()),
            description: user.description,
            verified: user.verified,
            protected: user.protected,
            followers_count: metrics.and_then(|m| m.followers_count),
            friends_count: metrics.and_then(|m| m.following_count),
        }
    }
}
