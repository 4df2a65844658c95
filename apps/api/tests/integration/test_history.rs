use super::helpers::{
    expect_status, get, post_json, read_json, send, spawn_app, spawn_app_without_store,
};
use axum::http::StatusCode;
use calculator_api::domain::calculation::repository::CalculationRepository;
use serde_json::{Value, json};

fn pairs(body: &Value) -> Vec<(String, String)> {
    body["history"]
        .as_array()
        .expect("history should be an array")
        .iter()
        .map(|entry| {
            (
                entry["expression"].as_str().unwrap_or_default().to_string(),
                entry["result"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}

#[tokio::test]
async fn disconnected_store_returns_demo_history() {
    let app = spawn_app_without_store();
    let res = expect_status(send(&app.app, get("/history")).await, StatusCode::OK).await;
    assert_eq!(res.headers()["x-history-source"], "demo");

    let body: Value = read_json(res).await;
    assert_eq!(
        pairs(&body),
        vec![
            ("2+2".to_string(), "4".to_string()),
            ("3*4".to_string(), "12".to_string()),
            ("10/2".to_string(), "5".to_string()),
        ]
    );
    assert!(body["history"][0]["created_at"].is_string());
}

#[tokio::test]
async fn closed_store_falls_back_to_demo_history() {
    let app = spawn_app();
    app.store.as_ref().expect("store").close().await;

    let res = expect_status(send(&app.app, get("/history")).await, StatusCode::OK).await;
    assert_eq!(res.headers()["x-history-source"], "demo");
    let body: Value = read_json(res).await;
    assert_eq!(pairs(&body).len(), 3);
}

#[tokio::test]
async fn connected_store_returns_latest_first() {
    let app = spawn_app();
    for expression in ["1 + 1", "2 * 5"] {
        let res = send(&app.app, post_json("/calculate", json!({ "expression": expression }))).await;
        expect_status(res, StatusCode::OK).await;
    }

    let res = expect_status(send(&app.app, get("/history")).await, StatusCode::OK).await;
    assert_eq!(res.headers()["x-history-source"], "store");
    let body: Value = read_json(res).await;
    assert_eq!(
        pairs(&body),
        vec![
            ("2 * 5".to_string(), "10".to_string()),
            ("1 + 1".to_string(), "2".to_string()),
        ]
    );
}

#[tokio::test]
async fn history_is_capped_at_ten_entries() {
    let app = spawn_app();
    for n in 0..12 {
        let res = send(
            &app.app,
            post_json("/calculate", json!({ "expression": format!("{} + 0", n) })),
        )
        .await;
        expect_status(res, StatusCode::OK).await;
    }

    let res = expect_status(send(&app.app, get("/history")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    let entries = pairs(&body);
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0], ("11 + 0".to_string(), "11".to_string()));
}
