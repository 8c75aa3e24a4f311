//! Shared router state

use std::fmt;

use crate::catalog::Catalog;
use crate::query::QueryEngine;

use super::config::{Environment, ServerConfig};

/// Immutable state injected into every handler
pub struct AppState {
    pub engine: QueryEngine,
    pub api_token: String,
    pub environment: Environment,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &ServerConfig) -> Self {
        Self {
            engine: QueryEngine::new(catalog),
            api_token: config.api_token.clone(),
            environment: config.environment,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("movies", &self.engine.catalog().len())
            .field("api_token", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}
