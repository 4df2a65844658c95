use crate::{
    application::calculate::{
        dto::{CalculateRequest, CalculateResponse},
        use_case::CalculateUseCase,
    },
    domain::calculation::errors::DomainError,
    infrastructure::monitoring::metrics::{CalculationOutcome, record_calculation},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};

pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let Json(request) =
        payload.inspect_err(|_| record_calculation(CalculationOutcome::InvalidInput))?;
    let expression = request
        .into_expression()
        .inspect_err(|_| record_calculation(CalculationOutcome::InvalidInput))?;

    let use_case = CalculateUseCase::new(state.evaluator.clone(), state.store.clone());
    match use_case.execute(expression).await {
        Ok(response) => {
            record_calculation(CalculationOutcome::Success);
            Ok(Json(response))
        }
        Err(err @ DomainError::InvalidExpression(_)) => {
            record_calculation(CalculationOutcome::EvaluationError);
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
