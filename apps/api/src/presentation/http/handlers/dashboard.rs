use axum::response::Html;
use chrono::Utc;

const HEALTH_DASHBOARD: &str = include_str!("../static/health_dashboard.html");
const HEALTH_SIMPLE: &str = include_str!("../static/health_simple.html");

/// Single-page dashboard; polls `/health` and `/metrics/simple` from the browser.
pub async fn health_ui() -> Html<&'static str> {
    Html(HEALTH_DASHBOARD)
}

pub async fn health_simple() -> Html<String> {
    let server_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    Html(HEALTH_SIMPLE.replace("{{server_time}}", &server_time))
}
