//! Movie catalog
//!
//! The catalog is the immutable, ordered set of movie records the service
//! answers queries from. It is loaded once at startup and shared read-only
//! by every request; cloning a `Catalog` only bumps a reference count.

mod errors;
mod loader;
mod movie;

pub use errors::{CatalogError, CatalogResult};
pub use loader::Catalog;
pub use movie::Movie;
