//! HTTP error handling and response conversion.
//!
//! Handler errors fall into three groups: client input errors (400, message passed
//! through), missing routes (404), and server-side failures (500, generic message).
//! Store outages never reach this module; they degrade the affected endpoints instead.

use crate::domain::calculation::errors::DomainError;
use axum::{
    Json,
    body::Body,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::any::Any;
use std::fmt;
use tower_http::catch_panic::ResponseForPanic;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request body or field failed validation (400).
    BadRequest(String),

    /// The evaluator rejected the expression (400, library message in `details`).
    InvalidExpression(String),

    /// No route matched (404).
    NotFound,

    /// Database operation failed (500).
    Database(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::InvalidExpression(msg) => write!(f, "Invalid expression: {}", msg),
            Self::NotFound => write!(f, "Endpoint not found"),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidExpression(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::InvalidExpression(_) => "Invalid mathematical expression".into(),
            Self::NotFound => "Endpoint not found".into(),
            Self::Database(_) => "Database operation failed".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }

    fn details(&self) -> Option<&str> {
        match self {
            Self::InvalidExpression(msg) => Some(msg),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("error={}", self),
            StatusCode::BAD_REQUEST => tracing::warn!("error={}", self),
            _ => tracing::debug!("error={}", self),
        }

        let body = match self.details() {
            Some(details) => json!({ "error": self.user_message(), "details": details }),
            None => json!({ "error": self.user_message() }),
        };
        (status, Json(body)).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => AppError::BadRequest(msg),
            DomainError::InvalidExpression(msg) => AppError::InvalidExpression(msg),
            DomainError::InfrastructureError(msg) => AppError::Database(msg),
        }
    }
}

// === Extractor Rejection Conversion ===

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

// === Panic Conversion ===

/// Turns a handler panic into a 500 JSON response.
///
/// The panic payload is only echoed back as `details` in development mode.
#[derive(Debug, Clone, Copy)]
pub struct PanicResponder {
    expose_details: bool,
}

impl PanicResponder {
    pub fn new(expose_details: bool) -> Self {
        Self { expose_details }
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> http::Response<Body> {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "unknown panic payload".to_string()
        };
        tracing::error!(panic = %detail, "unhandled error");

        let body = if self.expose_details {
            json!({ "error": "Internal server error", "details": detail })
        } else {
            json!({ "error": "Internal server error" })
        };

        let mut response = http::Response::new(Body::from(body.to_string()));
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        response
    }
}
