//! Observability plumbing: tracing subscriber setup and the Prometheus recorder.

pub mod logging;
pub mod metrics;
