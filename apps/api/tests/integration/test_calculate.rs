use super::helpers::{
    InMemoryStore, build_app, expect_status, post_json, read_json, send, spawn_app,
    spawn_app_without_store,
};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use std::sync::Arc;

async fn calculate(expression: Value) -> (StatusCode, Value) {
    let app = spawn_app_without_store();
    let res = send(&app.app, post_json("/calculate", json!({ "expression": expression }))).await;
    let status = res.status();
    (status, read_json(res).await)
}

#[tokio::test]
async fn adds_two_numbers() {
    let (status, body) = calculate(json!("2 + 2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "4");
    assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn respects_parentheses() {
    let (status, body) = calculate(json!("(2 + 3) * 4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "20");
}

#[tokio::test]
async fn evaluates_trigonometry_in_radians() {
    let (status, body) = calculate(json!("sin(pi / 2)")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "1");
}

#[tokio::test]
async fn division_by_zero_is_infinity() {
    let (status, body) = calculate(json!("1 / 0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Infinity");
}

#[tokio::test]
async fn incomplete_expression_is_rejected_with_details() {
    let (status, body) = calculate(json!("2 + ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid mathematical expression");
    assert!(body["details"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn missing_expression_is_rejected() {
    let app = spawn_app_without_store();
    let res = send(&app.app, post_json("/calculate", json!({}))).await;
    let res = expect_status(res, StatusCode::BAD_REQUEST).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "Expression is required and must be a string");
}

#[tokio::test]
async fn whitespace_only_expression_is_rejected() {
    let (status, body) = calculate(json!("   ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Expression is required and must be a string");
}

#[tokio::test]
async fn non_string_expression_is_rejected() {
    let (status, body) = calculate(json!(42)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Expression is required and must be a string");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = spawn_app_without_store();
    let req = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"expression\": "))
        .expect("failed to build request");
    let res = expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;
    let body: Value = read_json(res).await;
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn successful_calculation_is_persisted() {
    let app = spawn_app();
    let res = send(&app.app, post_json("/calculate", json!({ "expression": "7 * 6" }))).await;
    expect_status(res, StatusCode::OK).await;
    assert_eq!(app.store.as_ref().map(|s| s.len()), Some(1));
}

#[tokio::test]
async fn rejected_expression_is_not_persisted() {
    let app = spawn_app();
    let res = send(&app.app, post_json("/calculate", json!({ "expression": "2 +" }))).await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
    assert_eq!(app.store.as_ref().map(|s| s.len()), Some(0));
}

#[tokio::test]
async fn store_failure_still_returns_result() {
    let app = build_app(Some(Arc::new(InMemoryStore::failing_inserts())));
    let res = send(&app.app, post_json("/calculate", json!({ "expression": "3 * 3" }))).await;
    let res = expect_status(res, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["result"], "9");
}
