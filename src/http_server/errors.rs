//! # HTTP API Errors
//!
//! Every failure a request can hit, and the response it turns into.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::observability::Logger;
use crate::query::QueryError;

use super::config::Environment;

/// Body of every 401 response
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized request";

/// Request-level errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Missing, malformed or wrong bearer token
    #[error("Unauthorized request")]
    Unauthorized,

    /// Query parameters failed validation
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Unexpected failure while handling the request
    #[error("Internal error: {detail}")]
    Internal { detail: String, expose: bool },
}

impl ApiError {
    /// Internal error whose detail is only shown outside production
    pub fn internal(environment: Environment, detail: impl Into<String>) -> Self {
        ApiError::Internal {
            detail: detail.into(),
            expose: environment.exposes_error_details(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for 500 responses
    fn internal_body(detail: &str, expose: bool) -> Value {
        if expose {
            json!({ "error": detail })
        } else {
            json!({ "error": { "message": "server error" } })
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Unauthorized => {
                (status, Json(json!({ "error": UNAUTHORIZED_MESSAGE }))).into_response()
            }
            // Validation messages are plain text
            ApiError::Query(err) => (status, err.to_string()).into_response(),
            ApiError::Internal { detail, expose } => {
                Logger::error("INTERNAL_ERROR", &[("detail", &detail)]);
                (status, Json(Self::internal_body(&detail, expose))).into_response()
            }
        }
    }
}
