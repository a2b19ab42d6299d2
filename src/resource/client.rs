//! Resource client implementation.
//!
//! This module provides the [`ResourceClient`] type, which turns the five
//! resource operations into requests against `{domain}{path}`.

use std::fmt::Display;

use serde_json::Value;

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::resource::{path_with_id, Filters, Pagination, PathProvider, ResourceError};

/// Client for a single REST resource collection.
///
/// The resource is described by a [`PathProvider`]; everything else (base
/// URI, API key, timeouts) comes from the [`ClientConfig`].
///
/// | Operation | Request |
/// |---|---|
/// | [`create`](Self::create) | `POST {path}` with a JSON body |
/// | [`update`](Self::update) | `PATCH {path}/{id}` with a merge-patch body |
/// | [`find`](Self::find) | `GET {path}/{id}?{filters}` |
/// | [`find_all`](Self::find_all) | `GET {path}?pageSize=..&page=..&{filters}` |
/// | [`get_by_given_path`](Self::get_by_given_path) | `GET {given path}` |
///
/// Every operation is a single exchange with no retries. Responses are
/// returned as decoded JSON; bodies that are not valid JSON come back as
/// [`Value::Null`].
///
/// # Thread Safety
///
/// `ResourceClient` is `Send + Sync` whenever its provider is.
///
/// # Example
///
/// ```rust,ignore
/// use rest_resource_client::{ApiKey, ClientConfig, Filters, Pagination, ResourceClient, ResourcePath};
/// use serde_json::json;
///
/// let config = ClientConfig::builder()
///     .domain("api.example.com")
///     .api_key(ApiKey::new("my-api-key")?)
///     .build()?;
///
/// let users = ResourceClient::new(ResourcePath::new("/users"), &config)?;
///
/// let created = users.create(json!({"name": "Ada"})).await?;
/// let updated = users.update(7, json!({"nickname": null})).await?;
/// let user = users.find(7, &Filters::new()).await?;
/// let page = users.find_all(&Filters::new().with("status", "active"), Pagination::default()).await?;
/// ```
#[derive(Debug)]
pub struct ResourceClient<P> {
    /// Supplies the collection path.
    provider: P,
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient<crate::resource::ResourcePath>>();
};

impl<P: PathProvider> ResourceClient<P> {
    /// Creates a client for the resource described by `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyResourcePath`] if the provider's path is
    /// empty, or [`ConfigError::HttpClient`] if the HTTP client cannot be
    /// initialised.
    pub fn new(provider: P, config: &ClientConfig) -> Result<Self, ConfigError> {
        if provider.path().is_empty() {
            return Err(ConfigError::EmptyResourcePath);
        }

        let http_client = HttpClient::new(config)?;

        tracing::debug!(
            "Resource client for {} created against {}",
            provider.path(),
            http_client.base_uri()
        );

        Ok(Self {
            provider,
            http_client,
        })
    }

    /// Returns the path provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the collection path.
    #[must_use]
    pub fn path(&self) -> &str {
        self.provider.path()
    }

    /// Returns the URL path of a single entity: `{path}/{id}`.
    #[must_use]
    pub fn path_with_id(&self, id: impl Display) -> String {
        path_with_id(self.path(), id)
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Creates an entity: `POST {path}` with `data` as a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EntityCreation`] on a 4xx/5xx response or
    /// when the request cannot complete.
    pub async fn create(&self, data: Value) -> Result<Value, ResourceError> {
        let builder = HttpRequest::builder(HttpMethod::Post, self.path())
            .body(data)
            .body_type(DataType::Json);

        self.send("create", builder, ResourceError::creation).await
    }

    /// Partially updates an entity: `PATCH {path}/{id}` with `data` as a
    /// JSON merge-patch body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EntityCreation`] on a 4xx/5xx response or
    /// when the request cannot complete.
    pub async fn update(&self, id: impl Display, data: Value) -> Result<Value, ResourceError> {
        let builder = HttpRequest::builder(HttpMethod::Patch, self.path_with_id(id))
            .body(data)
            .body_type(DataType::MergePatch);

        self.send("update", builder, ResourceError::creation).await
    }

    /// Fetches one entity: `GET {path}/{id}`, with `filters` as the query
    /// string. Empty filters send no query string.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EntityFetch`] on a 4xx/5xx response or when
    /// the request cannot complete.
    pub async fn find(&self, id: impl Display, filters: &Filters) -> Result<Value, ResourceError> {
        let builder = HttpRequest::builder(HttpMethod::Get, self.path_with_id(id))
            .query(filters.to_pairs());

        self.send("find", builder, ResourceError::fetch).await
    }

    /// Fetches one page of the collection: `GET {path}` with `pageSize` and
    /// `page` followed by `filters` as the query string.
    ///
    /// Filters override the pagination parameters on a key clash. The
    /// response shape (entries plus paging metadata) is not enforced.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EntityFetch`] on a 4xx/5xx response or when
    /// the request cannot complete.
    pub async fn find_all(
        &self,
        filters: &Filters,
        pagination: Pagination,
    ) -> Result<Value, ResourceError> {
        let builder = HttpRequest::builder(HttpMethod::Get, self.path())
            .query(pagination.apply(filters).to_pairs());

        self.send("find_all", builder, ResourceError::fetch).await
    }

    /// Fetches an arbitrary path: `GET {path}`, resolved against the base
    /// URI but not prefixed with the collection path.
    ///
    /// The decoded body is usually a JSON object, but it is not checked:
    /// other JSON values come back as-is and an empty or invalid body as
    /// [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EntityFetch`] on a 4xx/5xx response or when
    /// the request cannot complete.
    pub async fn get_by_given_path(&self, path: &str) -> Result<Value, ResourceError> {
        let builder = HttpRequest::builder(HttpMethod::Get, path);

        self.send("get_by_given_path", builder, ResourceError::fetch)
            .await
    }

    /// Builds and sends a request, translating failures with `into_error`.
    async fn send(
        &self,
        operation: &'static str,
        builder: HttpRequestBuilder,
        into_error: fn(HttpError) -> ResourceError,
    ) -> Result<Value, ResourceError> {
        let result = match builder.build() {
            Ok(request) => self.http_client.request(request).await,
            Err(e) => Err(e.into()),
        };

        result.map(|response| response.body).map_err(|e| {
            tracing::warn!("{} on {} failed: {}", operation, self.path(), e);
            into_error(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;
    use crate::resource::ResourcePath;

    struct Events;

    impl PathProvider for Events {
        fn path(&self) -> &str {
            "/events"
        }
    }

    fn create_test_config() -> ClientConfig {
        ClientConfig::builder()
            .domain("api.example.com")
            .api_key(ApiKey::new("test-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_rejects_empty_path() {
        let result = ResourceClient::new(ResourcePath::new(""), &create_test_config());
        assert!(matches!(result, Err(ConfigError::EmptyResourcePath)));
    }

    #[test]
    fn test_path_comes_from_provider() {
        let client = ResourceClient::new(Events, &create_test_config()).unwrap();
        assert_eq!(client.path(), "/events");
        assert_eq!(client.path_with_id(12), "/events/12");
    }

    #[test]
    fn test_http_client_uses_config_base_uri() {
        let client = ResourceClient::new(Events, &create_test_config()).unwrap();
        assert_eq!(client.http_client().base_uri(), "https://api.example.com");
    }

    #[test]
    fn test_clients_are_independent() {
        let config = create_test_config();
        let events = ResourceClient::new(Events, &config).unwrap();
        let users = ResourceClient::new(ResourcePath::new("/users"), &config).unwrap();

        assert_eq!(events.path(), "/events");
        assert_eq!(users.path(), "/users");
        assert_eq!(users.provider(), &ResourcePath::new("/users"));
    }

    #[test]
    fn test_resource_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceClient<Events>>();
    }
}
