//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated QPay API base URL.
///
/// The URL must be absolute, use `http` or `https`, and carry no query or
/// fragment. A trailing slash is ignored when joining endpoint paths.
///
/// # Example
///
/// ```
/// use qpay::BaseUrl;
///
/// let base = BaseUrl::new("https://merchant.qpay.mn/").unwrap();
/// assert_eq!(base.join("/v2/auth/token"), "https://merchant.qpay.mn/v2/auth/token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the absolute URL for an API path such as `/v2/invoice`.
    pub fn join(&self, path: &str) -> String {
        // Url keeps a trailing slash on root paths
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}{}", base, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let base = BaseUrl::new("https://merchant.qpay.mn").unwrap();
        assert_eq!(base.host(), Some("merchant.qpay.mn"));
    }

    #[test]
    fn valid_localhost_http() {
        let base = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(
            base.join("/v2/payment/check"),
            "http://127.0.0.1:8080/v2/payment/check"
        );
    }

    #[test]
    fn keeps_path_prefix() {
        let base = BaseUrl::new("https://merchant-sandbox.qpay.mn/gateway/").unwrap();
        assert_eq!(
            base.join("/v2/invoice"),
            "https://merchant-sandbox.qpay.mn/gateway/v2/invoice"
        );
    }

    #[test]
    fn plain_http_gateway_accepted() {
        let base = BaseUrl::new("http://qpay-gateway.internal:8080").unwrap();
        assert_eq!(base.host(), Some("qpay-gateway.internal"));
        assert_eq!(
            base.join("/v2/auth/token"),
            "http://qpay-gateway.internal:8080/v2/auth/token"
        );
    }

    #[test]
    fn invalid_scheme() {
        let err = BaseUrl::new("ftp://merchant.qpay.mn").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn invalid_relative_url() {
        assert!(BaseUrl::new("/v2/invoice").is_err());
    }

    #[test]
    fn invalid_query_string() {
        let err = BaseUrl::new("https://merchant.qpay.mn/?lang=mn").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
