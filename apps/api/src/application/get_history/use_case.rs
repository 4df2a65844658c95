use super::dto::{HistoryEntry, HistoryResponse, HistorySource};
use crate::domain::calculation::{
    entity::DEMO_CALCULATIONS, errors::DomainError, repository::CalculationRepository,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

pub struct GetHistoryUseCase {
    repository: Option<Arc<dyn CalculationRepository>>,
    limit: i64,
}

impl GetHistoryUseCase {
    pub fn new(repository: Option<Arc<dyn CalculationRepository>>, limit: i64) -> Self {
        Self { repository, limit }
    }

    pub async fn execute(&self) -> Result<(HistoryResponse, HistorySource), DomainError> {
        let Some(repository) = self.repository.as_ref().filter(|r| r.is_connected()) else {
            warn!("store disconnected, serving demo history");
            return Ok((
                HistoryResponse {
                    history: demo_history(Utc::now()),
                },
                HistorySource::Demo,
            ));
        };

        let records = repository.find_recent(self.limit).await?;
        info!(count = records.len(), "history requested");
        Ok((
            HistoryResponse {
                history: records.into_iter().map(HistoryEntry::from).collect(),
            },
            HistorySource::Store,
        ))
    }
}

pub fn demo_history(now: DateTime<Utc>) -> Vec<HistoryEntry> {
    DEMO_CALCULATIONS
        .iter()
        .map(|(expression, result)| HistoryEntry {
            expression: expression.to_string(),
            result: result.to_string(),
            created_at: now,
        })
        .collect()
}
