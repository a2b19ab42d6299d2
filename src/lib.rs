//! # REST Resource Client
//!
//! A thin client for JSON REST APIs that standardizes create, update,
//! find-by-id and paginated list operations. Each resource only supplies
//! its collection path; the client handles URL composition, headers, query
//! merging, JSON decoding, and error translation.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the API key and the domain
//! - [`ResourceClient`], generic over a [`PathProvider`]
//! - Ordered query [`Filters`] and [`Pagination`]
//! - Two resource errors: [`ResourceError::EntityCreation`] and
//!   [`ResourceError::EntityFetch`]
//! - A low-level async [`HttpClient`] for requests outside the resource conventions
//!
//! ## Quick Start
//!
//! ```rust
//! use rest_resource_client::{ApiKey, ClientConfig, ResourceClient, ResourcePath};
//!
//! let config = ClientConfig::builder()
//!     .domain("api.example.com")
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .timeout(2.0)
//!     .build()
//!     .unwrap();
//!
//! let users = ResourceClient::new(ResourcePath::new("/users"), &config).unwrap();
//! assert_eq!(users.path_with_id(7), "/users/7");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use rest_resource_client::{Filters, Pagination};
//! use serde_json::json;
//!
//! // POST /users                        content-type: application/json
//! let created = users.create(json!({"name": "Ada"})).await?;
//!
//! // PATCH /users/7                     content-type: application/merge-patch+json
//! let updated = users.update(7, json!({"nickname": null})).await?;
//!
//! // GET /users/7?include=tickets
//! let user = users.find(7, &Filters::new().with("include", "tickets")).await?;
//!
//! // GET /users?pageSize=10&page=1&status=active
//! let page = users
//!     .find_all(&Filters::new().with("status", "active"), Pagination::default())
//!     .await?;
//!
//! // GET /reports/daily
//! let report = users.get_by_given_path("/reports/daily").await?;
//! ```
//!
//! ## Wire Conventions
//!
//! Every request carries `x-api-key`, `content-type` and `connection: close`.
//! Domains without a scheme get `https://` (or the configured scheme). The
//! connect timeout is fixed at 1 second; the overall timeout defaults to 2
//! seconds. Response bodies that are not valid JSON decode to `null`.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and builders validate on construction
//! - **Thread-safe**: Clients are `Send + Sync`
//! - **Async-first**: Built on `reqwest`, for use with the Tokio runtime
//! - **No hidden behaviour**: No retries, caching or rate limiting

pub mod clients;
pub mod config;
pub mod error;
pub mod resource;

// Re-export public types at crate root for convenience
pub use config::{
    ApiKey, ClientConfig, ClientConfigBuilder, Credentials, Domain, CONNECT_TIMEOUT,
    DEFAULT_SCHEME, DEFAULT_TIMEOUT_SECS,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export resource types
pub use resource::{
    Filters, Pagination, PathProvider, ResourceClient, ResourceError, ResourcePath,
};
