//! Bearer token gate
//!
//! Every request must present `Authorization: Bearer <token>` where the
//! token equals the configured shared secret. Rejections happen before
//! any query handling.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::observability::Logger;

use super::errors::ApiError;
use super::state::AppState;

/// Token from an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Constant-time comparison of the presented token with the secret
pub fn token_matches(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Middleware rejecting requests without the shared bearer token
pub async fn require_bearer_token(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let verdict =
        extract_bearer_token(request.headers()).map(|t| token_matches(t, &state.api_token));

    let reason = match verdict {
        Some(true) => return next.run(request).await,
        Some(false) => "token_mismatch",
        None => "missing_token",
    };

    Logger::warn(
        "AUTH_REJECTED",
        &[("path", request.uri().path()), ("reason", reason)],
    );
    ApiError::Unauthorized.into_response()
}
