//! `/movie` Endpoint Tests
//!
//! Drives the full router (auth gate, CORS, hardening headers, access log)
//! against the bundled sample dataset.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::routing::get as get_route;
use axum::Router;
use http_body_util::BodyExt;
use moviedex::catalog::Catalog;
use moviedex::http_server::{Environment, MovieServer, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

const TOKEN: &str = "test-api-token";
const SAMPLE: &str = include_str!("../data/movies-data-small.json");

fn catalog() -> Catalog {
    Catalog::from_json_str(SAMPLE).unwrap()
}

fn app_in(environment: Environment) -> Router {
    let mut config = ServerConfig::with_token(TOKEN);
    config.environment = environment;
    MovieServer::new(config, catalog()).router()
}

fn app() -> Router {
    app_in(Environment::Development)
}

async fn send(app: Router, uri: &str, authorization: Option<&str>) -> Response<Body> {
    let mut request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::ORIGIN, "http://example.com");
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }

    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get(uri: &str) -> Response<Body> {
    let authorization = bearer();
    send(app(), uri, Some(authorization.as_str())).await
}

async fn exploding_handler() -> &'static str {
    panic!("catalog index out of bounds")
}

/// Full middleware stack with an extra route whose handler panics
fn exploding_app(environment: Environment) -> Router {
    let mut config = ServerConfig::with_token(TOKEN);
    config.environment = environment;
    let extra = Router::new().route("/explode", get_route(exploding_handler));
    MovieServer::with_routes(config, catalog(), extra).router()
}

fn bearer() -> String {
    format!("Bearer {TOKEN}")
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("valid JSON response")
}

async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

fn is_json(response: &Response<Body>) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

fn array(value: &Value) -> &Vec<Value> {
    value.as_array().expect("response is a JSON array")
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_lists_full_catalog_without_params() {
    let response = get("/movie").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(is_json(&response));

    let body = body_json(response).await;
    let movies = array(&body);
    assert_eq!(movies.len(), catalog().len());

    let first = movies[0].as_object().unwrap();
    for key in [
        "filmtv_ID",
        "film_title",
        "year",
        "genre",
        "duration",
        "country",
        "director",
        "actors",
        "avg_vote",
        "votes",
    ] {
        assert!(first.contains_key(key), "missing key {key}");
    }
    assert_eq!(first.len(), 10);
}

#[tokio::test]
async fn test_full_listing_preserves_dataset_order() {
    let body = body_json(get("/movie").await).await;
    let ids: Vec<i64> = array(&body)
        .iter()
        .map(|m| m["filmtv_ID"].as_i64().unwrap())
        .collect();
    let expected: Vec<i64> = catalog().movies().iter().map(|m| m.filmtv_id).collect();

    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_empty_values_do_not_filter() {
    let body = body_json(get("/movie?genre=&country=").await).await;
    assert_eq!(array(&body).len(), catalog().len());
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_unknown_param_rejected() {
    let response = get("/movie?MISTAKE=error").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "Queries must be 'genre', 'country' or 'avg_vote'."
    );
}

#[tokio::test]
async fn test_unknown_param_ignored_next_to_allowed() {
    let response = get("/movie?MISTAKE=error&genre=drama").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(!array(&body).is_empty());
}

#[tokio::test]
async fn test_non_numeric_vote_rejected() {
    let response = get("/movie?avg_vote=high").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "'avg_vote' must be a number.");
}

// =============================================================================
// Filtering
// =============================================================================

#[tokio::test]
async fn test_genre_and_country_filters() {
    let response = get("/movie?genre=comedy&country=italy").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(is_json(&response));

    let body = body_json(response).await;
    let movies = array(&body);
    assert_eq!(movies.len(), 7);
    for movie in movies {
        assert!(movie["genre"].as_str().unwrap().contains("Comedy"));
        assert!(movie["country"].as_str().unwrap().contains("Italy"));
    }
}

#[tokio::test]
async fn test_country_filter_with_spaces() {
    let body = body_json(get("/movie?country=united%20states").await).await;
    let movies = array(&body);

    assert!(!movies.is_empty());
    for movie in movies {
        assert!(movie["country"].as_str().unwrap().contains("United States"));
    }
}

#[tokio::test]
async fn test_avg_vote_threshold() {
    let response = get("/movie?avg_vote=5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let movies = array(&body);
    assert_eq!(movies.len(), 21);
    for movie in movies {
        assert!(movie["avg_vote"].as_f64().unwrap() >= 5.0);
    }
}

#[tokio::test]
async fn test_all_filters_together() {
    let body =
        body_json(get("/movie?genre=comedy&country=united%20states&avg_vote=5").await).await;
    let titles: Vec<&str> = array(&body)
        .iter()
        .map(|m| m["film_title"].as_str().unwrap())
        .collect();

    assert_eq!(
        titles,
        vec!["Some Like It Hot", "When Harry Met Sally...", "Spaceballs"]
    );
}

#[tokio::test]
async fn test_same_query_same_result() {
    let first = body_bytes(get("/movie?genre=drama").await).await;
    let second = body_bytes(get("/movie?genre=drama").await).await;
    assert_eq!(first, second);
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_missing_token_unauthorized() {
    let response = send(app(), "/movie", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(is_json(&response));
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Unauthorized request"})
    );
}

#[tokio::test]
async fn test_wrong_token_unauthorized() {
    for header_value in ["Bearer nope", "Basic dGVzdA==", "Bearer", TOKEN] {
        let response = send(app(), "/movie", Some(header_value)).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{header_value:?}"
        );
    }
}

#[tokio::test]
async fn test_auth_checked_before_validation() {
    let response = send(app(), "/movie?MISTAKE=error", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_path_requires_token() {
    let response = send(app(), "/other", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Unauthorized request"})
    );
}

#[tokio::test]
async fn test_unknown_path_with_token_not_found() {
    let response = get("/other").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Internal Errors
// =============================================================================

#[tokio::test]
async fn test_handler_panic_terse_in_production() {
    let authorization = bearer();
    let response = send(
        exploding_app(Environment::Production),
        "/explode",
        Some(authorization.as_str()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(is_json(&response));
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": {"message": "server error"}})
    );
}

#[tokio::test]
async fn test_handler_panic_detailed_in_development() {
    let authorization = bearer();
    let response = send(
        exploding_app(Environment::Development),
        "/explode",
        Some(authorization.as_str()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "catalog index out of bounds"})
    );
}

#[tokio::test]
async fn test_panicking_route_still_gated() {
    let response = send(exploding_app(Environment::Production), "/explode", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Headers
// =============================================================================

#[tokio::test]
async fn test_cors_and_no_powered_by() {
    let response = get("/movie").await;
    let headers = response.headers();

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.get("x-powered-by").is_none());
    assert!(headers.get(header::SERVER).is_none());
}

#[tokio::test]
async fn test_hardening_headers() {
    let response = get("/movie").await;
    let headers = response.headers();

    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "SAMEORIGIN");
    assert_eq!(headers[header::REFERRER_POLICY], "no-referrer");
}

#[tokio::test]
async fn test_rejections_carry_cors() {
    let response = send(app_in(Environment::Production), "/movie", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
