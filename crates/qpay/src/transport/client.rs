//! HTTP transport for QPay requests.

use std::fmt;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::error::{ApiError, Error};
use crate::types::BaseUrl;

/// Per-request timeout of the default HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Placeholder for requests without a body.
pub const NO_BODY: Option<&'static ()> = None;

/// Value of the `Authorization` header for one request.
#[derive(Clone, Copy)]
pub enum Authorization<'a> {
    /// HTTP Basic with the merchant credentials.
    Basic { username: &'a str, password: &'a str },
    /// `Bearer <token>`.
    Bearer(&'a str),
}

impl fmt::Debug for Authorization<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authorization::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Authorization::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
        }
    }
}

/// Executes single HTTP exchanges against the QPay API and classifies the outcome.
///
/// The transport knows nothing about tokens: the caller supplies the
/// authorization for every request. Each call is sent exactly once.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpTransport {
    /// Create a transport with the default HTTP client (30 second timeout).
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be initialized.
    pub fn new(base_url: BaseUrl) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("qpay-rs/", env!("CARGO_PKG_VERSION")))
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(Self::with_client(base_url, client))
    }

    /// Create a transport around a caller-configured HTTP client.
    pub fn with_client(base_url: BaseUrl, client: reqwest::Client) -> Self {
        Self { client, base_url }
    }

    /// Returns the base URL this transport is configured for.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Send one request and return the raw body of a 2xx response.
    ///
    /// # Errors
    ///
    /// - [`Error::Encode`] if `body` cannot be serialized
    /// - [`Error::Transport`] if no response could be read
    /// - [`Error::Api`] for any status outside 200..300
    #[instrument(level = "debug", skip(self, body, auth), fields(base_url = %self.base_url))]
    pub async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Authorization<'_>,
    ) -> Result<Vec<u8>, Error>
    where
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(|b| serde_json::to_vec(b))
            .transpose()
            .map_err(Error::Encode)?;

        let url = self.base_url.join(path);
        debug!(%url, has_body = payload.is_some(), "QPay request");

        let mut request = self.client.request(method, &url);
        request = match auth {
            Authorization::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Authorization::Bearer(token) => request.bearer_auth(token),
        };
        if let Some(payload) = payload {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        trace!(status = %status, len = bytes.len(), "QPay response");

        if !status.is_success() {
            let error = ApiError::from_response(status, &bytes);
            debug!(status = error.status, code = %error.code, "QPay error response");
            return Err(error.into());
        }

        Ok(bytes.to_vec())
    }

    /// Send one request and decode a 2xx JSON body into `R`.
    ///
    /// An empty success body yields `R::default()`.
    ///
    /// # Errors
    ///
    /// As [`execute`](Self::execute), plus [`Error::Decode`] if the body does
    /// not match `R`.
    pub async fn request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Authorization<'_>,
    ) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let bytes = self.execute(method, path, body, auth).await?;
        decode(&bytes)
    }
}

fn decode<R: DeserializeOwned + Default>(bytes: &[u8]) -> Result<R, Error> {
    if bytes.is_empty() {
        return Ok(R::default());
    }
    serde_json::from_slice(bytes).map_err(Error::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvoiceResponse;

    #[test]
    fn transport_creation() {
        let base = BaseUrl::new("https://merchant.qpay.mn").unwrap();
        let transport = HttpTransport::new(base.clone()).unwrap();
        assert_eq!(transport.base_url(), &base);
    }

    #[test]
    fn authorization_debug_is_redacted() {
        let basic = Authorization::Basic {
            username: "merchant",
            password: "hunter2",
        };
        let debug = format!("{:?}", basic);
        assert!(debug.contains("merchant"));
        assert!(!debug.contains("hunter2"));

        let debug = format!("{:?}", Authorization::Bearer("token-value"));
        assert!(!debug.contains("token-value"));
    }

    #[test]
    fn empty_body_decodes_to_default() {
        let decoded: InvoiceResponse = decode(b"").unwrap();
        assert_eq!(decoded, InvoiceResponse::default());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let result: Result<InvoiceResponse, Error> = decode(b"<html>");
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
