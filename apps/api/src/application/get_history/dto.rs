use crate::domain::calculation::entity::CalculationRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
    pub created_at: DateTime<Utc>,
}

impl From<CalculationRecord> for HistoryEntry {
    fn from(record: CalculationRecord) -> Self {
        Self {
            expression: record.expression,
            result: record.result,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

/// Where a history page came from. Surfaced to clients as `x-history-source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySource {
    Store,
    Demo,
}

impl HistorySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Store => "store",
            Self::Demo => "demo",
        }
    }
}
