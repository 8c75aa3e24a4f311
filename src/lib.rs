//! moviedex - an authenticated, read-only query service over a static
//! movie catalog
//!
//! The catalog is loaded once at startup; `GET /movie` filters it by genre,
//! country and minimum average vote.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
