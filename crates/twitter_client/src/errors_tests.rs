//! Unit tests for twitter_client error types.

use super::*;

#[test]
fn test_api_error_display() {
    let error = Error::Api {
        status: 403,
        message: "Client is not enrolled".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "API request failed with status 403: Client is not enrolled"
    );
}

#[test]
fn test_auth_error_display() {
    let error = Error::AuthError("Unauthorized".to_string());
    assert_eq!(
        error.to_string(),
        "Failed to authenticate with the Twitter API: Unauthorized"
    );
}

#[test]
fn test_deserialization_error_display() {
    let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error = Error::from(json_error);
    assert!(error
        .to_string()
        .starts_with("Failed to deserialize Twitter response:"));
}

#[test]
fn test_invalid_response_display() {
    assert_eq!(Error::InvalidResponse.to_string(), "Invalid response format");
}

#[test]
fn test_invalid_url_display() {
    let error = Error::InvalidUrl("empty host".to_string());
    assert_eq!(error.to_string(), "Invalid request URL: empty host");
}

#[test]
fn test_not_found_display() {
    assert_eq!(Error::NotFound.to_string(), "Resource not found");
}

#[test]
fn test_rate_limit_display() {
    assert_eq!(Error::RateLimitExceeded.to_string(), "Rate limit exceeded");
}

#[test]
fn test_deserialization_error_preserves_source() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = Error::from(json_error);
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
