//! HTTP client for API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the configured
//! `reqwest` client and performs single request/response exchanges.

use std::collections::HashMap;

use reqwest::{StatusCode, Url};

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;
use crate::error::ConfigError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the request body type.
pub const CONTENT_TYPE_HEADER: &str = "content-type";

/// Header asking the server to close the connection after the response.
pub const CONNECTION_HEADER: &str = "connection";

/// Longest response body excerpt included in error messages, in characters.
const ERROR_BODY_SUMMARY_LEN: usize = 120;

/// HTTP client bound to a base URI.
///
/// The client handles:
/// - Resolving request paths against the base URI
/// - Default headers (`x-api-key`, `content-type`, `connection: close`)
/// - The fixed 1 second connect timeout and the configured overall timeout
/// - Lenient JSON decoding of response bodies
/// - Turning 4xx and 5xx responses into [`HttpResponseError`]
///
/// There is no retry logic: every call is exactly one exchange.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use rest_resource_client::{ApiKey, ClientConfig, HttpClient, HttpMethod, HttpRequest};
///
/// let config = ClientConfig::builder()
///     .domain("api.example.com")
///     .api_key(ApiKey::new("key").unwrap())
///     .build()?;
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "/users").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.example.com`).
    base_uri: String,
    /// Parsed base URI that request paths are resolved against.
    base_url: Url,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut default_headers = HashMap::new();
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.credentials().api_key().as_ref().to_string(),
        );
        default_headers.insert(
            CONTENT_TYPE_HEADER.to_string(),
            DataType::Json.as_content_type().to_string(),
        );
        default_headers.insert(CONNECTION_HEADER.to_string(), "close".to_string());

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout());
        if !config.timeout().is_zero() {
            builder = builder.timeout(config.timeout());
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_uri: config.base_uri().to_string(),
            base_url: config.domain().base_url().clone(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves a request path against the base URI.
    ///
    /// Resolution follows RFC 3986: `/users` replaces the base path,
    /// `users` is merged with it, and an absolute URL is used as-is.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPath`] if the path cannot
    /// be resolved.
    pub fn resolve(&self, path: &str) -> Result<Url, InvalidHttpRequestError> {
        self.base_url
            .join(path)
            .map_err(|_| InvalidHttpRequestError::InvalidPath {
                path: path.to_string(),
            })
    }

    /// Sends an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails or the path cannot be resolved (`InvalidRequest`)
    /// - A network error or timeout occurs (`Network`)
    /// - A 4xx or 5xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        let url = self.resolve(&request.path)?;

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                CONTENT_TYPE_HEADER.to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        tracing::debug!("{} {}", request.http_method.as_str(), url);

        let mut req_builder = self
            .client
            .request(request.http_method.into(), url.clone());

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        // The final URL carries the query string and any redirect target.
        let final_url = res.url().clone();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let response =
            HttpResponse::new(code, res_headers, HttpResponse::decode_body(&body_text));

        if response.is_error() {
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: Self::describe_failure(request.http_method, &final_url, code, &body_text),
                error_reference: response.request_id().map(String::from),
            }));
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Describes a failed exchange, e.g.
    /// ``Client error: `GET https://api.example.com/users/7` resulted in a `404 Not Found` response``.
    fn describe_failure(method: HttpMethod, url: &Url, code: u16, body_text: &str) -> String {
        let kind = if code >= 500 {
            "Server error"
        } else {
            "Client error"
        };
        let reason = StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default();
        let status = format!("{code} {reason}");

        let mut message = format!(
            "{kind}: `{} {url}` resulted in a `{}` response",
            method.as_str(),
            status.trim_end()
        );
        if let Some(summary) = Self::summarize_body(body_text) {
            message.push_str(":\n");
            message.push_str(&summary);
            message.push('\n');
        }
        message
    }

    /// Returns the body, cut to [`ERROR_BODY_SUMMARY_LEN`] characters.
    fn summarize_body(body_text: &str) -> Option<String> {
        if body_text.is_empty() {
            return None;
        }
        if body_text.chars().count() <= ERROR_BODY_SUMMARY_LEN {
            return Some(body_text.to_string());
        }
        let mut summary: String = body_text.chars().take(ERROR_BODY_SUMMARY_LEN).collect();
        summary.push_str(" (truncated...)");
        Some(summary)
    }
}
