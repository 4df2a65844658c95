//! Calculator backend: evaluates arithmetic expressions over HTTP, keeps an
//! append-only history in PostgreSQL, and exposes health and Prometheus metrics.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
