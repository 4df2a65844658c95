use crate::{
    application::get_history::{dto::HistoryResponse, use_case::GetHistoryUseCase},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Json, extract::State, http::HeaderName};

pub const HISTORY_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-history-source");

pub async fn get_history(
    State(state): State<AppState>,
) -> Result<([(HeaderName, &'static str); 1], Json<HistoryResponse>), AppError> {
    let use_case = GetHistoryUseCase::new(state.store.clone(), state.config.history_limit);
    let (history, source) = use_case.execute().await.map_err(|e| {
        tracing::error!(error = %e, "history fetch failed");
        AppError::Internal("Failed to fetch history".into())
    })?;

    Ok(([(HISTORY_SOURCE_HEADER, source.as_str())], Json(history)))
}
