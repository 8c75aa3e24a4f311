//! Movie HTTP Routes
//!
//! `GET /movie` with optional `genre`, `country` and `avg_vote` filters.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::observability::Logger;
use crate::query::MovieQuery;

use super::errors::ApiError;
use super::state::AppState;

/// Movie routes
pub fn movie_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movie", get(list_movies_handler))
        .with_state(state)
}

/// List movies matching the query, in dataset order
async fn list_movies_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let query = MovieQuery::from_pairs(&params)?;
    let movies = state.engine.execute(&query);
    trace_query(&query, movies.len());

    let body = serde_json::to_vec(&movies)
        .map_err(|e| ApiError::internal(state.environment, e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

fn trace_query(query: &MovieQuery, matched: usize) {
    let avg_vote = query.avg_vote.map(|v| v.to_string()).unwrap_or_default();
    Logger::trace(
        "MOVIE_QUERY",
        &[
            ("genre", query.genre.as_deref().unwrap_or("")),
            ("country", query.country.as_deref().unwrap_or("")),
            ("avg_vote", &avg_vote),
            ("matched", &matched.to_string()),
        ],
    );
}
