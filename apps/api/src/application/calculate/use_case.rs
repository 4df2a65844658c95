use super::dto::CalculateResponse;
use crate::domain::calculation::{
    entity::NewCalculation, errors::DomainError, repository::CalculationRepository,
    value_objects::Expression,
};
use crate::infrastructure::evaluator::traits::ExpressionEvaluator;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct CalculateUseCase {
    evaluator: Arc<dyn ExpressionEvaluator>,
    repository: Option<Arc<dyn CalculationRepository>>,
}

impl CalculateUseCase {
    pub fn new(
        evaluator: Arc<dyn ExpressionEvaluator>,
        repository: Option<Arc<dyn CalculationRepository>>,
    ) -> Self {
        Self {
            evaluator,
            repository,
        }
    }

    /// Evaluate the expression and, when the store is connected, persist the result.
    ///
    /// A failed insert is logged and swallowed: the caller still gets the result.
    #[instrument(skip_all, fields(expression = %expression.as_str()))]
    pub async fn execute(&self, expression: Expression) -> Result<CalculateResponse, DomainError> {
        info!("calculation request received");

        let result = self
            .evaluator
            .evaluate(expression.as_str())
            .map_err(|e| {
                warn!(error = %e, "mathematical error");
                DomainError::InvalidExpression(e.to_string())
            })?;

        if let Some(repository) = self.repository.as_ref().filter(|r| r.is_connected()) {
            let calculation = NewCalculation {
                expression: expression.value.clone(),
                result: result.clone(),
            };
            match repository.create(&calculation).await {
                Ok(record) => info!(id = record.id, "calculation saved to database"),
                Err(e) => error!(error = %e, "database save failed, continuing without save"),
            }
        }

        info!(result = %result, "calculation completed");
        Ok(CalculateResponse {
            result,
            timestamp: Utc::now(),
        })
    }
}
