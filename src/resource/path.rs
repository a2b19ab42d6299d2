//! Resource path providers.
//!
//! Every resource client needs exactly one thing from the resource it
//! serves: the collection path. [`PathProvider`] is that seam.

use std::fmt::Display;

/// Supplies the collection path of a resource, e.g. `/users`.
///
/// The path is used verbatim as the collection URL and as the prefix of
/// id-addressed URLs (`{path}/{id}`). It must not be empty.
///
/// # Example
///
/// ```rust
/// use rest_resource_client::PathProvider;
///
/// struct Events;
///
/// impl PathProvider for Events {
///     fn path(&self) -> &str {
///         "/events"
///     }
/// }
///
/// assert_eq!(Events.path(), "/events");
/// ```
pub trait PathProvider {
    /// Returns the collection path of the resource.
    fn path(&self) -> &str;
}

impl<P: PathProvider + ?Sized> PathProvider for &P {
    fn path(&self) -> &str {
        (**self).path()
    }
}

/// A [`PathProvider`] for paths known only at runtime.
///
/// ```rust
/// use rest_resource_client::{PathProvider, ResourcePath};
///
/// let users = ResourcePath::new("/users");
/// assert_eq!(users.path(), "/users");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Wraps a collection path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }
}

impl PathProvider for ResourcePath {
    fn path(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourcePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Builds the URL of a single entity: `{path}/{id}`.
#[must_use]
pub fn path_with_id(path: &str, id: impl Display) -> String {
    format!("{path}/{id}")
}
