//! HTTP client types.
//!
//! This module provides the transport layer underneath
//! [`ResourceClient`](crate::ResourceClient): request/response types, the
//! configured `reqwest` wrapper, and the HTTP error family.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client bound to a base URI
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response with a leniently decoded JSON body
//! - [`HttpMethod`]: Methods used by resource operations (GET, POST, PATCH)
//! - [`DataType`]: Content types for request bodies (JSON, JSON merge-patch)
//! - [`HttpError`]: Unified transport error
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_resource_client::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Post, "/users")
//!     .body(serde_json::json!({"name": "Ada"}))
//!     .body_type(DataType::Json)
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, CONNECTION_HEADER, CONTENT_TYPE_HEADER};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
