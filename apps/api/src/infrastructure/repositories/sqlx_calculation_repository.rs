use crate::domain::calculation::{
    entity::{CalculationRecord, NewCalculation},
    errors::DomainError,
    repository::CalculationRepository,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

pub struct SqlxCalculationRepository {
    pub pool: PgPool,
}

impl SqlxCalculationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalculationRepository for SqlxCalculationRepository {
    fn is_connected(&self) -> bool {
        !self.pool.is_closed()
    }

    #[instrument(skip_all, fields(expression = %calculation.expression))]
    async fn create(&self, calculation: &NewCalculation) -> Result<CalculationRecord, DomainError> {
        let record = sqlx::query_as::<_, CalculationRecord>(
            "INSERT INTO calculations (expression, result)
             VALUES ($1, $2)
             RETURNING id, expression, result, created_at",
        )
        .bind(&calculation.expression)
        .bind(&calculation.result)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        debug!(id = record.id, "calculation row inserted");
        Ok(record)
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<CalculationRecord>, DomainError> {
        sqlx::query_as::<_, CalculationRecord>(
            "SELECT id, expression, result, created_at
             FROM calculations
             ORDER BY created_at DESC, id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
