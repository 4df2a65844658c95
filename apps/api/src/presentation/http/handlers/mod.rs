pub mod calculate;
pub mod dashboard;
pub mod health;
pub mod history;
pub mod metrics;
pub mod root;
