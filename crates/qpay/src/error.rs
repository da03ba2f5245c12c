//! Error types for the qpay library.
//!
//! Failures fall into three groups that callers usually need to tell apart:
//!
//! - [`Error::Api`]: the server answered with a non-2xx status. This is the
//!   only variant meant for business-logic matching (see [`crate::codes`]).
//! - [`Error::Transport`]: no status/body pair was obtained (connection
//!   failure, timeout, truncated body).
//! - [`Error::Encode`] / [`Error::Decode`]: the request could not be
//!   serialized, or the server reported success with an unreadable payload.

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// The unified error type for qpay operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-success response from the QPay API.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A 2xx response carried a body that does not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Missing or unusable configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input validation errors (malformed base URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the classified API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error, including failures while reading the body.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// A non-success response from the QPay API.
///
/// `code` and `message` are always populated: when the body is not JSON, or
/// omits the `error`/`message` fields, `code` falls back to the HTTP reason
/// phrase and `message` to the raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Symbolic error code, e.g. `INVOICE_NOTFOUND`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Response body exactly as received.
    pub raw_body: String,
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let raw_body = String::from_utf8_lossy(body).into_owned();

        // Each field is taken on its own, and only when it is a string
        let parsed = serde_json::from_slice::<Value>(body).ok();
        let field = |name: &str| {
            parsed
                .as_ref()
                .and_then(|value| value.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        let code = field("error");
        let message = field("message");

        let code = code.filter(|c| !c.is_empty()).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string())
        });
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| raw_body.clone());

        Self {
            status: status.as_u16(),
            code,
            message,
            raw_body,
        }
    }

    /// Check whether the server reported the given error code.
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.is(crate::codes::AUTHENTICATION_FAILED)
            || self.is(crate::codes::NO_CREDENTIALS)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "qpay: {} - {} (status {})",
            self.code, self.message, self.status
        )
    }
}

impl std::error::Error for ApiError {}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("required environment variable {name} is not set")]
    MissingVar { name: &'static str },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL format.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },
}
