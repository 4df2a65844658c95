pub mod database;
pub mod evaluator;
pub mod monitoring;
pub mod repositories;
