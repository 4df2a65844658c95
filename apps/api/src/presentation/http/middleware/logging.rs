use crate::infrastructure::monitoring::metrics::record_http_request;
use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Route label for requests that reached the fallback.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Log every response and feed the HTTP request counter and duration histogram.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status().as_u16();
    tracing::info!(
        method = %method,
        uri = %uri,
        status,
        duration_ms = duration.as_millis() as u64,
        "HTTP request"
    );
    record_http_request(method.as_str(), &route, status, duration);

    response
}
