//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type and the lenient JSON
//! decoding applied to every response body.

use std::collections::HashMap;

use serde_json::Value;

/// An HTTP response from the API.
///
/// The body is always a [`serde_json::Value`]. Bodies that are empty or
/// not valid JSON decode to [`Value::Null`] instead of failing.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-case name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Decodes a raw body into JSON, falling back to [`Value::Null`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use rest_resource_client::HttpResponse;
    /// use serde_json::{json, Value};
    ///
    /// assert_eq!(HttpResponse::decode_body(r#"{"id":1}"#), json!({"id": 1}));
    /// assert_eq!(HttpResponse::decode_body("<html>oops</html>"), Value::Null);
    /// assert_eq!(HttpResponse::decode_body(""), Value::Null);
    /// ```
    #[must_use]
    pub fn decode_body(text: &str) -> Value {
        if text.is_empty() {
            return Value::Null;
        }
        serde_json::from_str(text).unwrap_or_else(|e| {
            tracing::debug!("Response body is not valid JSON, decoding to null: {}", e);
            Value::Null
        })
    }

    /// Returns `true` for client (4xx) and server (5xx) error responses.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.code >= 400
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `x-request-id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
