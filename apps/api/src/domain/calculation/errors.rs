use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid mathematical expression: {0}")]
    InvalidExpression(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
