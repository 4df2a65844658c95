use crate::domain::calculation::{errors::DomainError, value_objects::Expression};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

pub const EXPRESSION_REQUIRED: &str = "Expression is required and must be a string";

/// Body of `POST /calculate`.
///
/// `expression` is kept as a raw JSON value so that a missing field and a
/// non-string field are both reported as input errors instead of body rejections.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub expression: Option<Value>,
}

impl CalculateRequest {
    pub fn into_expression(self) -> Result<Expression, DomainError> {
        match self.expression {
            Some(Value::String(value)) if !value.trim().is_empty() => Expression::new(value)
                .map_err(|e| DomainError::ValidationError(format!("Invalid expression: {}", e))),
            _ => Err(DomainError::ValidationError(EXPRESSION_REQUIRED.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculateResponse {
    pub result: String,
    pub timestamp: DateTime<Utc>,
}
