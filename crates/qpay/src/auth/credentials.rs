//! Merchant credentials type.

use std::fmt;

/// Merchant credentials for QPay authentication.
///
/// This type holds the merchant username and password that are exchanged
/// for a token pair via HTTP Basic authentication.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use qpay::Credentials;
///
/// let creds = Credentials::new("TEST_MERCHANT", "123456");
/// assert_eq!(creds.username(), "TEST_MERCHANT");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the merchant username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("TEST_MERCHANT", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("TEST_MERCHANT"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
        assert_eq!(creds.password(), "secret123");
    }
}
