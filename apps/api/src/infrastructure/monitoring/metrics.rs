use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
pub const CALCULATIONS_TOTAL: &str = "calculations_total";
pub const SERVICE_INFO: &str = "calculator_backend_info";
pub const PROCESS_UPTIME_SECONDS: &str = "process_uptime_seconds";

const HTTP_DURATION_BUCKETS: [f64; 5] = [0.1, 0.5, 1.0, 2.0, 5.0];

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static INSTALL_LOCK: Mutex<()> = Mutex::new(());

/// Outcome label for `calculations_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationOutcome {
    Success,
    InvalidInput,
    EvaluationError,
}

impl CalculationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::InvalidInput => "invalid_input",
            Self::EvaluationError => "evaluation_error",
        }
    }
}

/// Install the process-wide Prometheus recorder.
///
/// The recorder can only be installed once per process; later calls return
/// a clone of the first handle.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    if let Some(handle) = HANDLE.get() {
        return Ok(handle.clone());
    }

    let _guard = INSTALL_LOCK
        .lock()
        .map_err(|_| anyhow::anyhow!("metrics install lock poisoned"))?;
    if let Some(handle) = HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(HTTP_REQUEST_DURATION_SECONDS.to_string()),
            &HTTP_DURATION_BUCKETS,
        )?
        .install_recorder()?;

    describe_metrics();
    Ok(HANDLE.get_or_init(|| handle).clone())
}

fn describe_metrics() {
    describe_counter!(HTTP_REQUESTS_TOTAL, "Total number of HTTP requests");
    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "Duration of HTTP requests in seconds"
    );
    describe_counter!(CALCULATIONS_TOTAL, "Calculation requests by outcome");
    describe_gauge!(SERVICE_INFO, "Calculator backend version information");
    describe_gauge!(PROCESS_UPTIME_SECONDS, "Seconds since the process started");

    gauge!(SERVICE_INFO, "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

pub fn record_http_request(method: &str, route: &str, status_code: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status_code", status_code.to_string()),
    ];
    counter!(HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration.as_secs_f64());
}

pub fn record_calculation(outcome: CalculationOutcome) {
    counter!(CALCULATIONS_TOTAL, "outcome" => outcome.as_str()).increment(1);
}

pub fn record_uptime(started_at: Instant) {
    gauge!(PROCESS_UPTIME_SECONDS).set(started_at.elapsed().as_secs_f64());
}
