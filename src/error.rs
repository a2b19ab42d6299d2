//! Error types for client configuration.
//!
//! Everything that can go wrong before a request is ever sent is reported
//! through [`ConfigError`]. Constructors validate eagerly so an invalid
//! domain, key or timeout is caught when the client is built, not on the
//! first call.
//!
//! # Example
//!
//! ```rust
//! use rest_resource_client::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a client.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide the key issued for this API.")]
    EmptyApiKey,

    /// API key contains characters that cannot be sent in an HTTP header.
    #[error("API key contains characters that are not allowed in an HTTP header value.")]
    InvalidApiKey,

    /// Domain cannot be empty.
    #[error("Domain cannot be empty. Expected a host such as 'api.example.com'.")]
    EmptyDomain,

    /// Domain does not form a valid absolute URL once the scheme is applied.
    #[error("Invalid domain '{domain}'. Expected a host such as 'api.example.com' or 'https://api.example.com'.")]
    InvalidDomain {
        /// The domain, after scheme normalization.
        domain: String,
    },

    /// Timeout is negative or not a finite number.
    #[error("Invalid timeout {timeout}. Expected a non-negative number of seconds (0 disables the timeout).")]
    InvalidTimeout {
        /// The timeout that was provided, in seconds.
        timeout: f64,
    },

    /// A resource path provider returned an empty path.
    #[error("Resource path cannot be empty. Expected a collection path such as '/users'.")]
    EmptyResourcePath,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be initialised.
    #[error("Failed to initialise HTTP client: {message}")]
    HttpClient {
        /// Description of the initialisation failure.
        message: String,
    },
}
