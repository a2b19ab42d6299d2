//! Resource clients for JSON REST collections.
//!
//! # Overview
//!
//! - [`PathProvider`]: The one extension point; supplies a collection path
//! - [`ResourcePath`]: A ready-made provider wrapping a string
//! - [`ResourceClient`]: `create`, `update`, `find`, `find_all`, `get_by_given_path`
//! - [`Filters`] and [`Pagination`]: Query parameters for fetch operations
//! - [`ResourceError`]: `EntityCreation` for writes, `EntityFetch` for reads
//!
//! # Defining a resource
//!
//! ```rust,ignore
//! use rest_resource_client::{PathProvider, ResourceClient};
//!
//! struct Venues;
//!
//! impl PathProvider for Venues {
//!     fn path(&self) -> &str {
//!         "/venues"
//!     }
//! }
//!
//! let venues = ResourceClient::new(Venues, &config)?;
//! let venue = venues.find(3, &Filters::new()).await?;
//! ```

mod client;
mod errors;
mod path;
mod query;

pub use client::ResourceClient;
pub use errors::ResourceError;
pub use path::{path_with_id, PathProvider, ResourcePath};
pub use query::{
    Filters, Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PAGE_PARAM, PAGE_SIZE_PARAM,
};
