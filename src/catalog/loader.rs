//! Dataset loading

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::observability::Logger;

use super::errors::{CatalogError, CatalogResult};
use super::movie::Movie;

/// Immutable, shared movie dataset
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Arc<[Movie]>,
}

impl Catalog {
    /// Wrap an already parsed list of movies, keeping its order
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: movies.into(),
        }
    }

    /// Parse a JSON array of movie records
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Ok(Self::from_movies(movies))
    }

    /// Read and parse the dataset file at `path`
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&contents)?;
        let count = catalog.len().to_string();
        Logger::info(
            "CATALOG_LOADED",
            &[("path", &path.display().to_string()), ("records", &count)],
        );

        Ok(catalog)
    }

    /// All movies in dataset order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
