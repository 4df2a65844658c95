use crate::presentation::http::state::AppState;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const SERVICE_NAME: &str = "calculator-backend";

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: String,
    pub database: String,
    pub uptime: String,
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reports the connection flag only; no query is sent to the store.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = state.is_store_connected();

    Json(HealthResponse {
        status: if connected { "OK" } else { "WARNING" }.to_string(),
        timestamp: Utc::now(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        uptime: format!("{:.2}s", state.started_at.elapsed().as_secs_f64()),
        environment: state.config.environment.to_string(),
        message: (!connected).then(|| "Database connection issues".to_string()),
    })
}
