//! Query parameters for fetch operations.
//!
//! [`Filters`] is an ordered set of string parameters. [`Pagination`]
//! prepends `pageSize` and `page` to a set of filters for list requests.

/// Query parameter carrying the page size.
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// Query parameter carrying the 1-based page number.
pub const PAGE_PARAM: &str = "page";

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page requested when none is given.
pub const DEFAULT_PAGE: u32 = 1;

/// Ordered query filters.
///
/// Keys keep their first insertion position; inserting an existing key
/// replaces its value in place.
///
/// # Example
///
/// ```rust
/// use rest_resource_client::Filters;
///
/// let filters = Filters::new()
///     .with("status", "active")
///     .with("city", "London")
///     .with("status", "archived");
///
/// assert_eq!(filters.len(), 2);
/// assert_eq!(filters.get("status"), Some("archived"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters(Vec<(String, String)>);

impl Filters {
    /// Creates an empty set of filters.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a filter, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a filter, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    /// Returns the value of a filter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the filters in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the filters as owned query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0.clone()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Filters {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Self::new();
        filters.extend(iter);
        filters
    }
}

/// Page selection for list requests.
///
/// Defaults to page [`DEFAULT_PAGE`] of [`DEFAULT_PAGE_SIZE`] entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// Number of entries per page.
    pub page_size: u32,
    /// 1-based page number.
    pub page: u32,
}

impl Pagination {
    /// Creates a page selection.
    #[must_use]
    pub const fn new(page_size: u32, page: u32) -> Self {
        Self { page_size, page }
    }

    /// Builds the list query: `pageSize` and `page` first, then `filters`.
    ///
    /// A filter with the same key as a pagination parameter wins, keeping
    /// the pagination parameter's position.
    ///
    /// ```rust
    /// use rest_resource_client::{Filters, Pagination};
    ///
    /// let query = Pagination::default().apply(&Filters::new().with("page", "3"));
    /// let pairs: Vec<(&str, &str)> = query.iter().collect();
    /// assert_eq!(pairs, [("pageSize", "10"), ("page", "3")]);
    /// ```
    #[must_use]
    pub fn apply(&self, filters: &Filters) -> Filters {
        let mut query = Filters::new()
            .with(PAGE_SIZE_PARAM, self.page_size.to_string())
            .with(PAGE_PARAM, self.page.to_string());
        query.extend(filters.iter());
        query
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_PAGE)
    }
}
