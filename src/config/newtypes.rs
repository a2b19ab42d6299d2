//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::header::HeaderValue;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer};
use std::fmt;

/// A validated API key, sent as the `x-api-key` header on every request.
///
/// The key must be non-empty and must be representable as an HTTP header
/// value.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `ApiKey(*****)`, so it never leaks through logs.
///
/// # Example
///
/// ```rust
/// use rest_resource_client::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, or
    /// [`ConfigError::InvalidApiKey`] if it cannot be used as a header value.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if HeaderValue::from_str(&key).is_err() {
            return Err(ConfigError::InvalidApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// Credentials used to authenticate against the API.
///
/// Only `api_key` is required. Credentials deserialize from any mapping,
/// ignoring keys they do not use:
///
/// ```rust
/// use rest_resource_client::Credentials;
///
/// let credentials: Credentials =
///     serde_json::from_str(r#"{"api_key": "secret", "region": "eu"}"#).unwrap();
/// assert_eq!(credentials.api_key().as_ref(), "secret");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    api_key: ApiKey,
}

impl Credentials {
    /// Creates credentials from a validated API key.
    #[must_use]
    pub const fn new(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    /// Builds credentials from a loosely typed JSON mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the mapping has no
    /// `api_key`, [`ConfigError::InvalidApiKey`] if it is not a string, and
    /// any [`ApiKey::new`] error otherwise.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ConfigError> {
        let key = value
            .get("api_key")
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let key = key.as_str().ok_or(ConfigError::InvalidApiKey)?;
        Ok(Self::new(ApiKey::new(key)?))
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

/// A domain normalized to carry a URL scheme.
///
/// If the input has no scheme (`https://`, `http://`, ...), the given scheme
/// is prepended verbatim; otherwise the input is kept unchanged. The
/// result, stripped of trailing slashes, must parse as an absolute URL.
///
/// # Example
///
/// ```rust
/// use rest_resource_client::Domain;
///
/// let domain = Domain::new("api.example.com/", "https://").unwrap();
/// assert_eq!(domain.as_ref(), "https://api.example.com/");
/// assert_eq!(domain.base_uri(), "https://api.example.com");
///
/// let domain = Domain::new("http://localhost:8080", "https://").unwrap();
/// assert_eq!(domain.base_uri(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    full_domain: String,
    base_url: Url,
}

impl Domain {
    /// Creates a normalized domain, prepending `scheme` when none is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDomain`] for blank input and
    /// [`ConfigError::InvalidDomain`] if the result is not an absolute URL.
    pub fn new(domain: impl Into<String>, scheme: &str) -> Result<Self, ConfigError> {
        let domain = domain.into();
        if domain.trim().is_empty() {
            return Err(ConfigError::EmptyDomain);
        }

        let full_domain = if has_scheme(&domain) {
            domain
        } else {
            format!("{scheme}{domain}")
        };

        let base_url = Url::parse(full_domain.trim_end_matches('/'))
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigError::InvalidDomain {
                domain: full_domain.clone(),
            })?;

        Ok(Self {
            full_domain,
            base_url,
        })
    }

    /// Returns the domain with every trailing `/` removed.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.full_domain.trim_end_matches('/')
    }

    /// Returns the parsed base URL that request paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

/// Returns `true` if `domain` starts with `scheme://`.
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`.
#[must_use]
pub fn has_scheme(domain: &str) -> bool {
    let Some(end) = domain.find("://") else {
        return false;
    };
    let scheme = &domain[..end];
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_rejects_header_breaking_characters() {
        let result = ApiKey::new("key\nInjected: header");
        assert!(matches!(result, Err(ConfigError::InvalidApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(*****)");
    }

    #[test]
    fn test_credentials_deserialize_ignores_extra_keys() {
        let credentials: Credentials =
            serde_json::from_value(json!({"api_key": "abc", "api_secret": "ignored"})).unwrap();
        assert_eq!(credentials.api_key().as_ref(), "abc");
    }

    #[test]
    fn test_credentials_deserialize_rejects_empty_key() {
        let result: Result<Credentials, _> = serde_json::from_value(json!({"api_key": ""}));
        assert!(result.is_err());
    }

    #[test]
    fn test_credentials_from_value_requires_api_key() {
        let result = Credentials::from_value(&json!({"token": "abc"}));
        assert_eq!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        );
    }

    #[test]
    fn test_credentials_from_value_rejects_non_string_key() {
        let result = Credentials::from_value(&json!({"api_key": 42}));
        assert_eq!(result, Err(ConfigError::InvalidApiKey));
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://api.example.com"));
        assert!(has_scheme("http://localhost:8080"));
        assert!(has_scheme("svn+ssh://host"));
        assert!(!has_scheme("api.example.com"));
        assert!(!has_scheme("localhost:8080"));
        assert!(!has_scheme("://api.example.com"));
        assert!(!has_scheme("1http://api.example.com"));
    }

    #[test]
    fn test_domain_without_scheme_gets_scheme_prepended() {
        let domain = Domain::new("api.example.com", "https://").unwrap();
        assert_eq!(domain.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_domain_with_scheme_is_unchanged() {
        let domain = Domain::new("http://api.example.com", "https://").unwrap();
        assert_eq!(domain.as_ref(), "http://api.example.com");
    }

    #[test]
    fn test_domain_custom_scheme_is_used_verbatim() {
        let domain = Domain::new("localhost:3000", "http://").unwrap();
        assert_eq!(domain.base_uri(), "http://localhost:3000");
    }

    #[test]
    fn test_domain_base_uri_strips_all_trailing_slashes() {
        let domain = Domain::new("api.example.com///", "https://").unwrap();
        assert_eq!(domain.base_uri(), "https://api.example.com");
    }

    #[test]
    fn test_domain_rejects_blank_input() {
        assert_eq!(Domain::new("  ", "https://"), Err(ConfigError::EmptyDomain));
    }

    #[test]
    fn test_domain_rejects_unparseable_url() {
        let result = Domain::new("api.example.com", "");
        assert!(matches!(result, Err(ConfigError::InvalidDomain { .. })));
    }
}
