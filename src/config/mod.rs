//! Configuration types for resource clients.
//!
//! This module provides the configuration used to construct a
//! [`ResourceClient`](crate::ResourceClient) and its underlying
//! [`HttpClient`](crate::HttpClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: Immutable settings shared by every request of a client
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`Credentials`]: The credential mapping (only `api_key` is required)
//! - [`Domain`]: A domain normalized to carry a URL scheme
//!
//! # Example
//!
//! ```rust
//! use rest_resource_client::{ApiKey, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .domain("api.example.com")
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .timeout(5.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://api.example.com");
//! ```

mod newtypes;

pub use newtypes::{has_scheme, ApiKey, Credentials, Domain};

use std::time::Duration;

use crate::error::ConfigError;

/// Scheme prepended to domains that do not carry one.
pub const DEFAULT_SCHEME: &str = "https://";

/// Overall request timeout used when none is configured, in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 2.0;

/// Connect timeout applied to every request, regardless of the overall timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Configuration for a resource client.
///
/// Built once through [`ClientConfig::builder`] and never mutated afterwards.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    domain: Domain,
    credentials: Credentials,
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the scheme-normalized domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns the base URI: the domain without trailing slashes.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.domain.base_uri()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the overall request timeout.
    ///
    /// [`Duration::ZERO`] means requests never time out as a whole; the
    /// connect timeout still applies.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the connect timeout, fixed at [`CONNECT_TIMEOUT`].
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        CONNECT_TIMEOUT
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Required fields are `domain` and either `credentials` or `api_key`.
///
/// # Defaults
///
/// - `scheme`: [`DEFAULT_SCHEME`] (`https://`)
/// - `timeout`: [`DEFAULT_TIMEOUT_SECS`] (2.0 seconds)
///
/// # Example
///
/// ```rust
/// use rest_resource_client::{ClientConfig, Credentials};
/// use serde_json::json;
///
/// let credentials = Credentials::from_value(&json!({"api_key": "key"})).unwrap();
/// let config = ClientConfig::builder()
///     .domain("localhost:8080")
///     .scheme("http://")
///     .credentials(credentials)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_uri(), "http://localhost:8080");
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    domain: Option<String>,
    credentials: Option<Credentials>,
    scheme: Option<String>,
    timeout: Option<f64>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the domain (required). A scheme is prepended if missing.
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the credentials (required unless [`api_key`](Self::api_key) is used).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Shortcut for credentials holding only an API key.
    #[must_use]
    pub fn api_key(self, key: ApiKey) -> Self {
        self.credentials(Credentials::new(key))
    }

    /// Overrides the scheme prepended to scheme-less domains, e.g. `http://`.
    ///
    /// The value is used verbatim, so it must include the `://` separator.
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Sets the overall request timeout in seconds. `0` disables it.
    #[must_use]
    pub fn timeout(mut self, seconds: f64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Builds the [`ClientConfig`], validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `domain` or
    /// `credentials` are not set, [`ConfigError::InvalidTimeout`] for a
    /// negative, non-finite or out-of-range timeout, and any [`Domain::new`] error.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let domain = self
            .domain
            .ok_or(ConfigError::MissingRequiredField { field: "domain" })?;
        let credentials = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;

        let scheme = self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME);
        let domain = Domain::new(domain, scheme)?;

        let seconds = self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let timeout = Duration::try_from_secs_f64(seconds)
            .map_err(|_| ConfigError::InvalidTimeout { timeout: seconds })?;

        Ok(ClientConfig {
            domain,
            credentials,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    #[test]
    fn test_builder_applies_defaults() {
        let config = ClientConfig::builder()
            .domain("api.example.com")
            .api_key(test_key())
            .build()
            .unwrap();

        assert_eq!(config.base_uri(), "https://api.example.com");
        assert_eq!(config.timeout(), Duration::from_secs(2));
        assert_eq!(config.connect_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_builder_requires_domain() {
        let result = ClientConfig::builder().api_key(test_key()).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "domain" })
        ));
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = ClientConfig::builder().domain("api.example.com").build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_builder_scheme_override() {
        let config = ClientConfig::builder()
            .domain("api.example.com")
            .scheme("http://")
            .api_key(test_key())
            .build()
            .unwrap();

        assert_eq!(config.domain().as_ref(), "http://api.example.com");
    }

    #[test]
    fn test_builder_scheme_override_ignored_when_domain_has_scheme() {
        let config = ClientConfig::builder()
            .domain("https://api.example.com")
            .scheme("http://")
            .api_key(test_key())
            .build()
            .unwrap();

        assert_eq!(config.base_uri(), "https://api.example.com");
    }

    #[test]
    fn test_builder_fractional_timeout() {
        let config = ClientConfig::builder()
            .domain("api.example.com")
            .api_key(test_key())
            .timeout(0.25)
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_builder_zero_timeout_is_allowed() {
        let config = ClientConfig::builder()
            .domain("api.example.com")
            .api_key(test_key())
            .timeout(0.0)
            .build()
            .unwrap();

        assert!(config.timeout().is_zero());
    }

    #[test]
    fn test_builder_rejects_negative_timeout() {
        let result = ClientConfig::builder()
            .domain("api.example.com")
            .api_key(test_key())
            .timeout(-1.0)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
    }

    #[test]
    fn test_builder_rejects_nan_timeout() {
        let result = ClientConfig::builder()
            .domain("api.example.com")
            .api_key(test_key())
            .timeout(f64::NAN)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
    }

    #[test]
    fn test_builder_rejects_overflowing_timeout() {
        let result = ClientConfig::builder()
            .domain("api.example.com")
            .api_key(test_key())
            .timeout(1e30)
            .build();

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidTimeout { timeout: 1e30 }
        );
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientConfig>();
    }
}
