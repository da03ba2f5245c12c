//! Token lifecycle management.

use chrono::Utc;
use reqwest::Method;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::Error;
use crate::transport::{Authorization, HttpTransport, NO_BODY, endpoints};

use super::credentials::Credentials;
use super::tokens::{AccessToken, TokenResponse, TokenState};

/// Keeps one token pair valid for a client instance.
///
/// [`ensure_token`](Self::ensure_token) picks the cheapest sufficient
/// strategy: reuse the cached access token, exchange the refresh token, or
/// authenticate again with the merchant credentials.
///
/// # Concurrency
///
/// The token state sits behind a single mutex that is held only to read the
/// state and to install a new pair, never across a network call. Callers
/// racing on an expired token may therefore each authenticate; both results
/// are valid and the last one stored wins.
///
/// Dropping an in-flight call leaves the state untouched: a pair is stored
/// only after its response has been fully decoded.
pub struct SessionManager {
    transport: HttpTransport,
    credentials: Credentials,
    state: Mutex<TokenState>,
}

impl SessionManager {
    /// Create a session manager with an empty token state.
    pub fn new(transport: HttpTransport, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            state: Mutex::new(TokenState::default()),
        }
    }

    /// Return an access token valid for at least the expiry margin.
    ///
    /// # Errors
    ///
    /// Returns the full-authentication error when neither the cached token
    /// nor a refresh could be used. A failed refresh is never returned; it
    /// only triggers the fallback. The stored state is unchanged on error.
    #[instrument(skip(self), fields(username = %self.credentials.username()))]
    pub async fn ensure_token(&self) -> Result<AccessToken, Error> {
        let now = Utc::now().timestamp();

        let refresh_token = {
            let state = self.state.lock().await;
            if state.access_is_fresh(now) {
                return Ok(state.access_token().clone());
            }
            state
                .refresh_is_fresh(now)
                .then(|| state.refresh_token().as_str().to_string())
        };

        if let Some(refresh_token) = refresh_token {
            debug!("Access token expired, refreshing");
            match self.request_refresh(&refresh_token).await {
                Ok(token) => return Ok(self.store(&token).await),
                Err(err) => {
                    warn!(error = %err, "Token refresh failed, falling back to authentication");
                }
            }
        }

        let token = self.request_token().await?;
        Ok(self.store(&token).await)
    }

    /// Authenticate with the merchant credentials and store the new pair.
    ///
    /// Always performs exactly one network call.
    #[instrument(skip(self), fields(username = %self.credentials.username()))]
    pub async fn get_token(&self) -> Result<TokenResponse, Error> {
        let token = self.request_token().await?;
        self.store(&token).await;
        Ok(token)
    }

    /// Exchange the stored refresh token for a new pair and store it.
    ///
    /// Always performs exactly one network call, even when no refresh token
    /// is stored; the server's rejection is returned as-is.
    #[instrument(skip(self), fields(username = %self.credentials.username()))]
    pub async fn refresh_token(&self) -> Result<TokenResponse, Error> {
        let refresh_token = {
            let state = self.state.lock().await;
            state.refresh_token().as_str().to_string()
        };

        let token = self.request_refresh(&refresh_token).await?;
        self.store(&token).await;
        Ok(token)
    }

    /// Snapshot of the current token state.
    pub async fn token_state(&self) -> TokenState {
        self.state.lock().await.clone()
    }

    async fn request_token(&self) -> Result<TokenResponse, Error> {
        info!("Requesting new token");

        let auth = Authorization::Basic {
            username: self.credentials.username(),
            password: self.credentials.password(),
        };
        self.transport
            .request(Method::POST, endpoints::AUTH_TOKEN, NO_BODY, auth)
            .await
    }

    async fn request_refresh(&self, refresh_token: &str) -> Result<TokenResponse, Error> {
        info!("Refreshing token");

        self.transport
            .request(
                Method::POST,
                endpoints::AUTH_REFRESH,
                NO_BODY,
                Authorization::Bearer(refresh_token),
            )
            .await
    }

    /// Replace the whole token state and return the new access token.
    async fn store(&self, token: &TokenResponse) -> AccessToken {
        let new_state = TokenState::from_response(token);
        let access_token = new_state.access_token().clone();

        *self.state.lock().await = new_state;

        debug!(expires_at = token.expires_in, "Token stored");
        access_token
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("base_url", self.transport.base_url())
            .field("credentials", &self.credentials)
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BaseUrl;

    fn manager() -> SessionManager {
        let base = BaseUrl::new("https://merchant.qpay.mn").unwrap();
        let transport = HttpTransport::new(base).unwrap();
        SessionManager::new(transport, Credentials::new("merchant", "secret"))
    }

    #[tokio::test]
    async fn starts_empty() {
        let state = manager().token_state().await;
        assert!(state.is_empty());
        assert_eq!(state.access_expires_at(), 0);
    }

    #[tokio::test]
    async fn store_replaces_whole_state() {
        let manager = manager();
        let first = TokenResponse {
            access_token: "a1".into(),
            refresh_token: "r1".into(),
            expires_in: 100,
            refresh_expires_in: 200,
            ..Default::default()
        };
        manager.store(&first).await;

        let second = TokenResponse {
            access_token: "a2".into(),
            expires_in: 300,
            ..Default::default()
        };
        let access = manager.store(&second).await;

        let state = manager.token_state().await;
        assert_eq!(access.as_str(), "a2");
        assert_eq!(state.access_token().as_str(), "a2");
        assert_eq!(state.access_expires_at(), 300);
        assert!(state.refresh_token().is_empty());
        assert_eq!(state.refresh_expires_at(), 0);
    }

    #[tokio::test]
    async fn fresh_token_needs_no_network() {
        // The base URL is unroutable in tests; a cache hit never touches it.
        let manager = manager();
        let token = TokenResponse {
            access_token: "cached".into(),
            expires_in: Utc::now().timestamp() + 3600,
            ..Default::default()
        };
        manager.store(&token).await;

        let access = manager.ensure_token().await.unwrap();
        assert_eq!(access.as_str(), "cached");
    }

    #[test]
    fn debug_hides_secrets() {
        let debug = format!("{:?}", manager());
        assert!(!debug.contains("secret"));
        assert!(debug.contains("merchant"));
    }
}
