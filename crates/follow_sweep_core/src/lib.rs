//! # FollowSweep Core
//!
//! Follower hygiene operations for X/Twitter: unfollow an account by
//! handle, page through the signed-in account's followers, and check
//! whether a given user follows the signed-in account.
//!
//! ## Overview
//!
//! Three independent operations share one collaborator and one output
//! shape:
//!
//! - [`unfollow_user`] resolves a handle, removes the follow edge from
//!   the signed-in account, and returns the target's profile.
//! - [`get_my_followers`] pages through the follower list until a target
//!   count is reached or the listing is exhausted.
//! - [`is_following_me`] inspects one page of a user's follow list for
//!   the signed-in account.
//!
//! ## Architecture
//!
//! The operations follow a dependency injection pattern for testability:
//! a [`UserSession`] supplies the signed-in account and a
//! [`FollowGraphClient`] that performs the actual API calls. Every
//! operation checks the session first and fails with
//! [`Error::NotAuthenticated`] before touching the network when it is
//! signed out. Underlying failures are wrapped exactly once with a
//! context naming the operation; there is no retry and no partial-result
//! suppression.
//!
//! All returned users are normalized into [`UserProfile`] values.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use follow_sweep_core::get_my_followers;
//! use session_handler::BearerSession;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = BearerSession::connect_from_env().await?;
//! let followers = get_my_followers(&session, Some(50)).await?;
//! for follower in followers {
//!     println!("@{} ({})", follower.screen_name, follower.name);
//! }
//! # Ok(())
//! # }
//! ```

use session_handler::{CurrentAccount, UserSession};
use tracing::{debug, info, instrument};
use twitter_client::FollowGraphClient;

mod errors;
mod profile;

pub use errors::{Error, OpResult};
pub use profile::{DEFAULT_PROFILE_IMAGE_URL, UserProfile};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Follower count requested when the caller does not name one.
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Largest page the listing endpoints accept.
const PAGE_SIZE_CAP: u32 = 100;

/// Page size used for the single-page follow check.
const FOLLOW_CHECK_PAGE_SIZE: u32 = 100;

/// Unfollows `username` on behalf of the signed-in account.
///
/// Resolves the handle to a user id, removes the follow edge from the
/// signed-in account to that id, and returns the target's profile built
/// from the lookup response. The profile is not re-fetched after the
/// unfollow, so its counts reflect the state at lookup time. The
/// unfollow call mutates remote state and is issued exactly once.
///
/// # Errors
///
/// - [`Error::NotAuthenticated`] when the session has no client handle
///   or cannot name the signed-in account.
/// - [`Error::UserNotFound`] when the handle matches no user; the
///   unfollow call is never issued in that case.
/// - [`Error::Remote`] when an underlying API call fails.
#[instrument(skip(session))]
pub async fn unfollow_user(username: &str, session: &dyn UserSession) -> OpResult<UserProfile> {
    let context = format!("Failed to unfollow user {username}");

    let client = require_client(session, &context)?;
    let target = client
        .user_by_username(username)
        .await
        .map_err(|error| remote(&context, error))?
        .ok_or_else(|| Error::UserNotFound {
            context: context.clone(),
            username: username.to_string(),
        })?;
    let account = require_account(session, &context).await?;

    info!(target_id = %target.id, "Unfollowing user");
    client
        .unfollow(&account.account_id, &target.id)
        .await
        .map_err(|error| remote(&context, error))?;

    Ok(UserProfile::from(target))
}

/// Lists the signed-in account's followers, up to roughly `max_results`
/// (default [`DEFAULT_MAX_RESULTS`]).
///
/// Pages are fetched sequentially, at most 100 entries each, until the
/// target count is reached, the service stops returning a continuation
/// cursor, or a page comes back without data. Entries are kept in the
/// order the service returned them. The final page is appended whole, so
/// the returned list can exceed `max_results` by at most one page's worth
/// of entries; once the target is reached no further page is requested.
///
/// A `max_results` of zero short-circuits to an empty list without any
/// page request.
///
/// # Errors
///
/// - [`Error::NotAuthenticated`] when the session has no client handle
///   or cannot name the signed-in account.
/// - [`Error::Remote`] when a page fetch fails; entries gathered from
///   earlier pages are discarded.
#[instrument(skip(session))]
pub async fn get_my_followers(
    session: &dyn UserSession,
    max_results: Option<u32>,
) -> OpResult<Vec<UserProfile>> {
    let context = "Failed to get followers";
    let max_results = max_results.unwrap_or(DEFAULT_MAX_RESULTS);

    let client = require_client(session, context)?;
    let account = require_account(session, context).await?;

    let mut followers: Vec<UserProfile> = Vec::new();
    if max_results == 0 {
        return Ok(followers);
    }

    let mut cursor: Option<String> = None;
    let mut pages = 0u32;
    loop {
        let page_size = PAGE_SIZE_CAP.min(max_results - followers.len() as u32);
        pages += 1;
        debug!(page = pages, page_size, "Fetching followers page");

        let page = client
            .followers_page(&account.account_id, page_size, cursor.as_deref())
            .await
            .map_err(|error| remote(context, error))?;

        if page.users.is_empty() {
            debug!(page = pages, "Page carried no data, stopping");
            break;
        }

        followers.extend(page.users.into_iter().map(UserProfile::from));
        cursor = page.next_token;

        if followers.len() as u32 >= max_results {
            break;
        }
        if cursor.is_none() {
            break;
        }
    }

    info!(count = followers.len(), pages, "Retrieved followers");
    Ok(followers)
}

/// Checks whether `username` follows the signed-in account.
///
/// Inspects a single page (up to 100 entries) of the accounts `username`
/// follows. A `true` answer is definitive. A `false` answer only means
/// the signed-in account was absent from that first page, so for users
/// following more than a page's worth of accounts it is not proof of
/// "not following".
///
/// # Errors
///
/// - [`Error::NotAuthenticated`] when the session has no client handle
///   or cannot name the signed-in account.
/// - [`Error::UserNotFound`] when the handle matches no user.
/// - [`Error::Remote`] when an underlying API call fails. Membership
///   itself never fails: an empty page simply answers `false`.
#[instrument(skip(session))]
pub async fn is_following_me(username: &str, session: &dyn UserSession) -> OpResult<bool> {
    let context = format!("Failed to check if {username} follows you");

    let client = require_client(session, &context)?;
    let target = client
        .user_by_username(username)
        .await
        .map_err(|error| remote(&context, error))?
        .ok_or_else(|| Error::UserNotFound {
            context: context.clone(),
            username: username.to_string(),
        })?;
    let account = require_account(session, &context).await?;

    let page = client
        .following_page(&target.id, FOLLOW_CHECK_PAGE_SIZE)
        .await
        .map_err(|error| remote(&context, error))?;

    let follows_me = page.users.iter().any(|user| user.id == account.account_id);
    debug!(
        inspected = page.users.len(),
        follows_me, "Checked follow state"
    );
    Ok(follows_me)
}

fn require_client<'a>(
    session: &'a dyn UserSession,
    context: &str,
) -> OpResult<&'a dyn FollowGraphClient> {
    session.client_handle().ok_or_else(|| Error::NotAuthenticated {
        context: context.to_string(),
    })
}

async fn require_account(session: &dyn UserSession, context: &str) -> OpResult<CurrentAccount> {
    session
        .current_account()
        .await
        .ok_or_else(|| Error::NotAuthenticated {
            context: context.to_string(),
        })
}

fn remote(context: &str, source: twitter_client::Error) -> Error {
    Error::Remote {
        context: context.to_string(),
        source,
    }
}
