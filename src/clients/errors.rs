//! HTTP-specific error types.
//!
//! This module contains error types for HTTP operations: error responses,
//! request validation failures, and transport failures.
//!
//! - [`HttpResponseError`]: A 4xx or 5xx response from the API
//! - [`InvalidHttpRequestError`]: A request that failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_resource_client::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a 4xx or 5xx status.
///
/// The message describes the exchange the way
/// ``Client error: `GET https://api.example.com/users/7` resulted in a `404 Not Found` response``
/// does, followed by a summary of the body when there is one.
///
/// # Example
///
/// ```rust
/// use rest_resource_client::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Client error: `GET https://api.example.com/users/7` resulted in a `404 Not Found` response".to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().contains("404 Not Found"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable description of the failed exchange.
    pub message: String,
    /// Reference ID for error reporting (from the `x-request-id` header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent, for example when a POST has no body.
///
/// # Example
///
/// ```rust
/// use rest_resource_client::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "POST".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use POST without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path cannot be resolved against the base URI.
    #[error("Cannot resolve request path '{path}' against the base URI.")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP error response (4xx or 5xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, connection or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 400,
            message: "Client error: `POST https://api.example.com/users` resulted in a `400 Bad Request` response".to_string(),
            error_reference: None,
        };
        assert!(error.to_string().starts_with("Client error"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "PATCH".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use PATCH without specifying data."
        );
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_status_code_only_for_responses() {
        let response: HttpError = HttpResponseError {
            code: 503,
            message: "Server error".to_string(),
            error_reference: None,
        }
        .into();
        assert_eq!(response.status_code(), Some(503));

        let invalid: HttpError = InvalidHttpRequestError::MissingBodyType.into();
        assert_eq!(invalid.status_code(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let http_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            error_reference: None,
        };
        let _ = http_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid_error;
    }
}
