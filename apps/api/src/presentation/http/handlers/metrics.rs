use crate::{
    infrastructure::monitoring::metrics::record_uptime, presentation::http::state::AppState,
};
use axum::{extract::State, http::header, response::IntoResponse};

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Handle /metrics endpoint
pub async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    record_uptime(state.started_at);
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.metrics.render(),
    )
}

/// Same exposition as `/metrics`, served as plain text for the dashboard.
pub async fn simple_metrics(State(state): State<AppState>) -> impl IntoResponse {
    record_uptime(state.started_at);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.metrics.render(),
    )
}
