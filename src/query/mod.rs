//! # Query Engine
//!
//! Answers `/movie` queries against the catalog:
//!
//! 1. validate parameter names against the allow-list
//! 2. build a [`FilterPipeline`] from the typed [`MovieQuery`]
//! 3. narrow the dataset, keeping its order
//!
//! The engine holds no mutable state; concurrent queries share one catalog.

mod filter;
mod params;

pub use filter::{FilterPipeline, MovieFilter, TextField};
pub use params::{validate_param_names, MovieQuery, QueryError, ALLOWED_PARAMS};

use crate::catalog::{Catalog, Movie};

/// Read-only query engine over a catalog
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Catalog,
}

impl QueryEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run an already parsed query
    pub fn execute(&self, query: &MovieQuery) -> Vec<&Movie> {
        FilterPipeline::from_query(query).apply(self.catalog.movies())
    }

    /// Validate raw query string pairs, then run them
    pub fn search<K, V>(&self, pairs: &[(K, V)]) -> Result<Vec<&Movie>, QueryError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = MovieQuery::from_pairs(pairs)?;
        Ok(self.execute(&query))
    }
}
