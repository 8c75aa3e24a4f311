//! # moviedex HTTP Server Module
//!
//! Serves the movie catalog over HTTP.
//!
//! # Endpoints
//!
//! - `GET /movie` - filtered movie listing (bearer token required)
//!
//! Every response carries permissive CORS and hardening headers and is
//! recorded in the access log.

pub mod access_log;
pub mod auth;
pub mod config;
pub mod errors;
pub mod headers;
pub mod movie_routes;
pub mod server;
pub mod state;

pub use config::{ConfigError, Environment, ServerConfig};
pub use errors::ApiError;
pub use server::MovieServer;
pub use state::AppState;
