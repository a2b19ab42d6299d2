//! Error type for resource operations.
//!
//! Resource operations surface exactly two failures: writes (`create`,
//! `update`) fail with [`ResourceError::EntityCreation`] and reads (`find`,
//! `find_all`, `get_by_given_path`) fail with [`ResourceError::EntityFetch`].
//! Client and server errors are not told apart at this layer; the status
//! code is carried for callers that care.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_resource_client::ResourceError;
//!
//! match users.find(7, &Filters::new()).await {
//!     Ok(user) => println!("Found: {}", user["name"]),
//!     Err(ResourceError::EntityFetch { code: Some(404), .. }) => println!("No such user"),
//!     Err(e) => println!("Lookup failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for resource operations.
///
/// Both variants carry the message and status code of the underlying
/// failure and expose it through [`std::error::Error::source`]. `code` is
/// `None` when no response was received (network failure, timeout).
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Creating or updating an entity failed.
    #[error("Entity creation failed: {message}")]
    EntityCreation {
        /// Message of the underlying failure.
        message: String,
        /// HTTP status code, if a response was received.
        code: Option<u16>,
        /// The underlying HTTP error.
        #[source]
        source: HttpError,
    },

    /// Fetching one or more entities failed.
    #[error("Entity fetch failed: {message}")]
    EntityFetch {
        /// Message of the underlying failure.
        message: String,
        /// HTTP status code, if a response was received.
        code: Option<u16>,
        /// The underlying HTTP error.
        #[source]
        source: HttpError,
    },
}

impl ResourceError {
    /// Wraps a failed create or update.
    #[must_use]
    pub fn creation(source: HttpError) -> Self {
        Self::EntityCreation {
            message: source.to_string(),
            code: source.status_code(),
            source,
        }
    }

    /// Wraps a failed find, list or path fetch.
    #[must_use]
    pub fn fetch(source: HttpError) -> Self {
        Self::EntityFetch {
            message: source.to_string(),
            code: source.status_code(),
            source,
        }
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn code(&self) -> Option<u16> {
        match self {
            Self::EntityCreation { code, .. } | Self::EntityFetch { code, .. } => *code,
        }
    }

    /// Returns the message of the underlying failure.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::EntityCreation { message, .. } | Self::EntityFetch { message, .. } => message,
        }
    }
}
