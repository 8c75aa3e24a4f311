//! Access logging
//!
//! One `HTTP_REQUEST` event per response. Production uses a short format;
//! other environments add client address, protocol and a CLF timestamp.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::body::{Body, HttpBody};
use axum::extract::{ConnectInfo, State};
use axum::http::{header, Request, Response as HttpResponse};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};

use crate::observability::Logger;

use super::config::Environment;

/// Access log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLogFormat {
    /// method, uri, status, length, duration
    Tiny,
    /// Tiny plus remote address, HTTP version and timestamp
    Common,
}

impl From<Environment> for AccessLogFormat {
    fn from(environment: Environment) -> Self {
        if environment.is_production() {
            AccessLogFormat::Tiny
        } else {
            AccessLogFormat::Common
        }
    }
}

/// What gets recorded about a finished request
#[derive(Debug, Clone)]
pub struct AccessRecord {
    pub method: String,
    pub uri: String,
    pub http_version: String,
    pub remote_addr: Option<SocketAddr>,
    pub status: u16,
    pub content_length: Option<u64>,
    pub duration: Duration,
    pub received_at: DateTime<Utc>,
}

impl AccessRecord {
    /// Log fields for `format`
    pub fn fields(&self, format: AccessLogFormat) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("method", self.method.clone()),
            ("uri", self.uri.clone()),
            ("status", self.status.to_string()),
            (
                "content_length",
                self.content_length
                    .map_or_else(|| "-".to_string(), |len| len.to_string()),
            ),
            (
                "duration_ms",
                format!("{:.3}", self.duration.as_secs_f64() * 1000.0),
            ),
        ];

        if format == AccessLogFormat::Common {
            fields.push((
                "remote_addr",
                self.remote_addr
                    .map_or_else(|| "-".to_string(), |addr| addr.ip().to_string()),
            ));
            fields.push(("http_version", self.http_version.clone()));
            fields.push((
                "date",
                self.received_at.format("%d/%b/%Y:%H:%M:%S %z").to_string(),
            ));
        }

        fields
    }
}

fn content_length<B: HttpBody>(response: &HttpResponse<B>) -> Option<u64> {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .or_else(|| response.body().size_hint().exact())
}

/// Middleware writing one access log line per request
pub async fn log_requests(
    State(format): State<AccessLogFormat>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let received_at = Utc::now();
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let http_version = format!("{:?}", request.version());
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let response = next.run(request).await;

    let record = AccessRecord {
        method,
        uri,
        http_version,
        remote_addr,
        status: response.status().as_u16(),
        content_length: content_length(&response),
        duration: started.elapsed(),
        received_at,
    };
    let fields = record.fields(format);
    let borrowed: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    Logger::info("HTTP_REQUEST", &borrowed);

    response
}
