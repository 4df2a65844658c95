use super::entity::{CalculationRecord, NewCalculation};
use super::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    /// Whether the store connection is still open.
    fn is_connected(&self) -> bool;
    async fn create(&self, calculation: &NewCalculation) -> Result<CalculationRecord, DomainError>;
    /// Most recent records first.
    async fn find_recent(&self, limit: i64) -> Result<Vec<CalculationRecord>, DomainError>;
    async fn close(&self);
}
