use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A persisted calculation.
///
/// Records are append-only: once inserted they are never updated or deleted.
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct CalculationRecord {
    pub id: i32,
    pub expression: String,
    pub result: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    pub expression: String,
    pub result: String,
}

/// Served by the history endpoint while the store is unreachable.
pub const DEMO_CALCULATIONS: [(&str, &str); 3] = [("2+2", "4"), ("3*4", "12"), ("10/2", "5")];
