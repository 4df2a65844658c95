use thiserror::Error;

/// Failure reported by the underlying expression library, message passed through as-is.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct EvaluationError(pub String);

pub trait ExpressionEvaluator: Send + Sync {
    /// Parse and evaluate `expression`, returning the rendered result.
    fn evaluate(&self, expression: &str) -> Result<String, EvaluationError>;
}
