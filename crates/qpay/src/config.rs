//! Client configuration.

use std::fmt;

use crate::auth::Credentials;
use crate::error::{ConfigError, Error};
use crate::models::CreateSimpleInvoiceRequest;
use crate::types::BaseUrl;

pub const ENV_BASE_URL: &str = "QPAY_BASE_URL";
pub const ENV_USERNAME: &str = "QPAY_USERNAME";
pub const ENV_PASSWORD: &str = "QPAY_PASSWORD";
pub const ENV_INVOICE_CODE: &str = "QPAY_INVOICE_CODE";
pub const ENV_CALLBACK_URL: &str = "QPAY_CALLBACK_URL";

/// QPay API configuration.
///
/// The username and password authenticate the merchant; the invoice code
/// and callback URL are defaults for invoices built with
/// [`Config::simple_invoice`].
#[derive(Clone)]
pub struct Config {
    pub base_url: BaseUrl,
    pub username: String,
    pub password: String,
    pub invoice_code: String,
    pub callback_url: String,
}

impl Config {
    /// Create a configuration explicitly.
    pub fn new(
        base_url: BaseUrl,
        username: impl Into<String>,
        password: impl Into<String>,
        invoice_code: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            base_url,
            username: username.into(),
            password: password.into(),
            invoice_code: invoice_code.into(),
            callback_url: callback_url.into(),
        }
    }

    /// Load the configuration from `QPAY_*` environment variables.
    ///
    /// All five variables are required:
    ///
    /// - `QPAY_BASE_URL`: API base URL
    /// - `QPAY_USERNAME`: merchant username
    /// - `QPAY_PASSWORD`: merchant password
    /// - `QPAY_INVOICE_CODE`: default invoice code
    /// - `QPAY_CALLBACK_URL`: payment callback URL
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] naming the first variable that is
    /// unset or empty, or an invalid-input error for a malformed base URL.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| -> Result<String, Error> {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingVar { name }.into())
        };

        let base_url = require(ENV_BASE_URL)?;
        let username = require(ENV_USERNAME)?;
        let password = require(ENV_PASSWORD)?;
        let invoice_code = require(ENV_INVOICE_CODE)?;
        let callback_url = require(ENV_CALLBACK_URL)?;

        Ok(Self {
            base_url: BaseUrl::new(base_url)?,
            username,
            password,
            invoice_code,
            callback_url,
        })
    }

    /// Returns the merchant credentials.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }

    /// Build a simple invoice using the configured invoice code and callback URL.
    pub fn simple_invoice(
        &self,
        sender_invoice_no: impl Into<String>,
        invoice_receiver_code: impl Into<String>,
        invoice_description: impl Into<String>,
        amount: f64,
    ) -> CreateSimpleInvoiceRequest {
        CreateSimpleInvoiceRequest {
            invoice_code: self.invoice_code.clone(),
            sender_invoice_no: sender_invoice_no.into(),
            invoice_receiver_code: invoice_receiver_code.into(),
            invoice_description: invoice_description.into(),
            sender_branch_code: None,
            amount,
            callback_url: self.callback_url.clone(),
        }
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("invoice_code", &self.invoice_code)
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (ENV_BASE_URL, "https://merchant.qpay.mn".to_string()),
            (ENV_USERNAME, "testuser".to_string()),
            (ENV_PASSWORD, "testpass".to_string()),
            (ENV_INVOICE_CODE, "INV_CODE".to_string()),
            (ENV_CALLBACK_URL, "https://example.com/callback".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<Config, Error> {
        Config::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn loads_all_variables() {
        let config = load(&full_env()).unwrap();
        assert_eq!(config.base_url.host(), Some("merchant.qpay.mn"));
        assert_eq!(config.username, "testuser");
        assert_eq!(config.password, "testpass");
        assert_eq!(config.invoice_code, "INV_CODE");
        assert_eq!(config.callback_url, "https://example.com/callback");
    }

    #[test]
    fn each_missing_variable_is_named() {
        for name in [
            ENV_BASE_URL,
            ENV_USERNAME,
            ENV_PASSWORD,
            ENV_INVOICE_CODE,
            ENV_CALLBACK_URL,
        ] {
            let mut env = full_env();
            env.remove(name);
            let err = load(&env).unwrap_err();
            assert!(
                matches!(err, Error::Config(ConfigError::MissingVar { name: missing }) if missing == name),
                "expected {name} to be reported, got {err}"
            );
        }
    }

    #[test]
    fn empty_variable_counts_as_missing() {
        let mut env = full_env();
        env.insert(ENV_PASSWORD, String::new());
        let err = load(&env).unwrap_err();
        assert!(err.to_string().contains(ENV_PASSWORD));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let mut env = full_env();
        env.insert(ENV_BASE_URL, "not a url".to_string());
        assert!(matches!(load(&env), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn debug_hides_password() {
        let config = load(&full_env()).unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("testuser"));
        assert!(!debug.contains("testpass"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn simple_invoice_uses_defaults() {
        let config = load(&full_env()).unwrap();
        let request = config.simple_invoice("ORDER-1", "terminal", "Coffee", 4500.0);
        assert_eq!(request.invoice_code, "INV_CODE");
        assert_eq!(request.callback_url, "https://example.com/callback");
        assert_eq!(request.sender_invoice_no, "ORDER-1");
        assert_eq!(request.amount, 4500.0);
        assert!(request.sender_branch_code.is_none());
    }
}
