//! # HTTP Server
//!
//! Builds the router, layers the cross-cutting middleware around it and
//! serves it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, response::IntoResponse, response::Response, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::catalog::Catalog;
use crate::observability::Logger;

use super::access_log::{log_requests, AccessLogFormat};
use super::auth::require_bearer_token;
use super::config::{ConfigError, Environment, ServerConfig};
use super::errors::ApiError;
use super::headers::harden_response_headers;
use super::movie_routes::movie_routes;
use super::state::AppState;

type PanicPayload = Box<dyn std::any::Any + Send + 'static>;

/// HTTP server for the movie catalog
pub struct MovieServer {
    config: ServerConfig,
    router: Router,
}

impl MovieServer {
    /// Create a server answering from `catalog`
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        Self::with_routes(config, catalog, Router::new())
    }

    /// Create a server that also serves `extra` behind the same middleware
    pub fn with_routes(config: ServerConfig, catalog: Catalog, extra: Router) -> Self {
        let state = Arc::new(AppState::new(catalog, &config));
        let routes = movie_routes(state.clone()).merge(extra);
        let router = Self::build_router(&config, state, routes);
        Self { config, router }
    }

    /// Wrap `routes` in all middleware.
    ///
    /// Outermost first: access log, CORS, hardening headers, bearer token
    /// gate, panic handler, then the routes. The gate covers every path,
    /// so unknown routes are 401 for anonymous clients.
    fn build_router(config: &ServerConfig, state: Arc<AppState>, routes: Router) -> Router {
        let environment = config.environment;

        routes
            .layer(CatchPanicLayer::custom(move |panic: PanicPayload| {
                panic_response(environment, panic)
            }))
            .layer(middleware::from_fn_with_state(state, require_bearer_token))
            .layer(middleware::from_fn(harden_response_headers))
            .layer(cors_layer(&config.cors_origins))
            .layer(middleware::from_fn_with_state(
                AccessLogFormat::from(environment),
                log_requests,
            ))
    }

    /// Listen address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self
            .socket_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info(
            "SERVER_LISTENING",
            &[
                ("addr", &addr.to_string()),
                ("environment", self.config.environment.as_str()),
            ],
        );

        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        Logger::info("SERVER_STOPPED", &[]);
        Ok(())
    }
}

/// Permissive `*` unless origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|s| s.parse().ok()).collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn panic_response(environment: Environment, panic: PanicPayload) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::internal(environment, detail).into_response()
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until killed
        std::future::pending::<()>().await;
    }
}
