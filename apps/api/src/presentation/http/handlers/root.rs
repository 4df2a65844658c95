use crate::presentation::http::errors::AppError;
use axum::Json;

pub async fn banner() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Calculator API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "calculate": "POST /calculate",
            "history": "GET /history",
            "health": "GET /health",
            "health-ui": "GET /health-ui",
            "metrics": "GET /metrics"
        }
    }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
