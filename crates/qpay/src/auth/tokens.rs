//! Token types for QPay authentication.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::null_as_default;

/// Lead time before the declared expiry at which a token stops being reused.
pub const EXPIRY_MARGIN_SECS: i64 = 30;

/// A bearer token authorizing domain operations.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A longer-lived token exchangeable for a new access token.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in refresh requests.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Hide token value in Debug output
impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// Response body of `/v2/auth/token` and `/v2/auth/refresh`.
///
/// Despite their names, `expires_in` and `refresh_expires_in` are absolute
/// Unix timestamps in seconds, not durations. They are kept as the server
/// sends them.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub token_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_expires_in: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub access_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expires_in: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub scope: String,
    #[serde(rename = "not-before-policy", skip_serializing_if = "Option::is_none")]
    pub not_before_policy: Option<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub session_state: String,
}

impl TokenResponse {
    /// Access token expiry as a timestamp.
    pub fn access_expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expires_in, 0)
    }

    /// Refresh token expiry as a timestamp.
    pub fn refresh_expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.refresh_expires_in, 0)
    }
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token_type", &self.token_type)
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &"[REDACTED]")
            .field("refresh_expires_in", &self.refresh_expires_in)
            .field("scope", &self.scope)
            .field("session_state", &self.session_state)
            .finish()
    }
}

/// The token pair held by a client, with absolute expiry times in epoch seconds.
///
/// A state is only ever built whole from a [`TokenResponse`]; it is never
/// updated field by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenState {
    access_token: AccessToken,
    refresh_token: RefreshToken,
    access_expires_at: i64,
    refresh_expires_at: i64,
}

impl TokenState {
    pub(crate) fn from_response(token: &TokenResponse) -> Self {
        Self {
            access_token: AccessToken::new(token.access_token.clone()),
            refresh_token: RefreshToken::new(token.refresh_token.clone()),
            access_expires_at: token.expires_in,
            refresh_expires_at: token.refresh_expires_in,
        }
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &RefreshToken {
        &self.refresh_token
    }

    /// Access token expiry in epoch seconds.
    pub fn access_expires_at(&self) -> i64 {
        self.access_expires_at
    }

    /// Refresh token expiry in epoch seconds.
    pub fn refresh_expires_at(&self) -> i64 {
        self.refresh_expires_at
    }

    /// True before any token pair has been stored.
    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty() && self.refresh_token.is_empty()
    }

    /// Whether the access token can be reused at `now` (epoch seconds).
    pub fn access_is_fresh(&self, now: i64) -> bool {
        !self.access_token.is_empty()
            && now < self.access_expires_at.saturating_sub(EXPIRY_MARGIN_SECS)
    }

    /// Whether the refresh token can be exchanged at `now` (epoch seconds).
    pub fn refresh_is_fresh(&self, now: i64) -> bool {
        !self.refresh_token.is_empty()
            && now < self.refresh_expires_at.saturating_sub(EXPIRY_MARGIN_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(access_expiry: i64, refresh_expiry: i64) -> TokenResponse {
        TokenResponse {
            access_token: "access-abc".to_string(),
            refresh_token: "refresh-xyz".to_string(),
            expires_in: access_expiry,
            refresh_expires_in: refresh_expiry,
            token_type: "Bearer".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn access_token_hides_value_in_debug() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn token_response_hides_values_in_debug() {
        let debug = format!("{:?}", response(100, 200));
        assert!(!debug.contains("access-abc"));
        assert!(!debug.contains("refresh-xyz"));
        assert!(debug.contains("Bearer"));
    }

    #[test]
    fn token_response_treats_null_as_default() {
        let json = r#"{
            "token_type": "bearer",
            "refresh_expires_in": 1700007200,
            "refresh_token": "r",
            "access_token": "a",
            "expires_in": 1700003600,
            "scope": null,
            "not-before-policy": null,
            "session_state": null
        }"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "a");
        assert_eq!(token.expires_in, 1700003600);
        assert_eq!(token.scope, "");
        assert_eq!(token.session_state, "");
        assert!(token.not_before_policy.is_none());
    }

    #[test]
    fn token_response_decodes_absolute_expiry() {
        let json = r#"{
            "token_type": "bearer",
            "refresh_expires_in": 1700007200,
            "refresh_token": "r",
            "access_token": "a",
            "expires_in": 1700003600,
            "scope": "profile email",
            "not-before-policy": 0,
            "session_state": "abc"
        }"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.expires_in, 1_700_003_600);
        assert_eq!(token.not_before_policy, Some(serde_json::json!(0)));
        assert_eq!(
            token.access_expires_at().map(|t| t.timestamp()),
            Some(1_700_003_600)
        );
    }

    #[test]
    fn empty_state_is_never_fresh() {
        let state = TokenState::default();
        assert!(state.is_empty());
        assert!(!state.access_is_fresh(0));
        assert!(!state.refresh_is_fresh(0));
    }

    #[test]
    fn freshness_respects_margin() {
        let state = TokenState::from_response(&response(1_000, 2_000));
        assert!(state.access_is_fresh(969));
        assert!(!state.access_is_fresh(970));
        assert!(state.refresh_is_fresh(1_969));
        assert!(!state.refresh_is_fresh(1_970));
    }

    #[test]
    fn empty_token_with_future_expiry_is_not_fresh() {
        let mut token = response(i64::MAX, i64::MAX);
        token.access_token.clear();
        token.refresh_token.clear();
        let state = TokenState::from_response(&token);
        assert!(!state.access_is_fresh(0));
        assert!(!state.refresh_is_fresh(0));
    }

    #[test]
    fn extreme_expiry_does_not_overflow() {
        let state = TokenState::from_response(&response(i64::MIN, i64::MIN));
        assert!(!state.access_is_fresh(i64::MIN));
        assert!(!state.refresh_is_fresh(0));
    }
}
