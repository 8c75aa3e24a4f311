//! Observability for moviedex
//!
//! Structured JSON logging for server lifecycle events and access logs.
//!
//! ```ignore
//! use moviedex::observability::Logger;
//!
//! Logger::info("CATALOG_LOADED", &[("records", "42")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
