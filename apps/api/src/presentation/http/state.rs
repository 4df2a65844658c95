use crate::{
    config::Config,
    domain::calculation::repository::CalculationRepository,
    infrastructure::evaluator::traits::ExpressionEvaluator,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when the startup connection failed.
    pub store: Option<Arc<dyn CalculationRepository>>,
    pub evaluator: Arc<dyn ExpressionEvaluator>,
    pub metrics: PrometheusHandle,
    pub started_at: Instant,
}

impl AppState {
    /// The store, if it was opened at startup and has not been closed since.
    pub fn connected_store(&self) -> Option<&Arc<dyn CalculationRepository>> {
        self.store.as_ref().filter(|store| store.is_connected())
    }

    pub fn is_store_connected(&self) -> bool {
        self.connected_store().is_some()
    }
}
