//! Prometheus metrics for API requests and connectivity checks.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::error::DashboardError;

// === Metric Name Constants ===

/// Client request latency metric name.
pub const METRIC_API_REQUEST_LATENCY: &str = "api_request_latency_ms";
/// Client requests counter metric name.
pub const METRIC_API_REQUESTS: &str = "api_requests_total";
/// Connectivity checks counter metric name.
pub const METRIC_CONNECTIVITY_CHECKS: &str = "connectivity_checks_total";
/// Discarded stale check results counter metric name.
pub const METRIC_STALE_CHECKS: &str = "stale_checks_discarded_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_API_REQUEST_LATENCY,
        "API client request latency in milliseconds"
    );
    describe_counter!(METRIC_API_REQUESTS, "Total number of API client requests");
    describe_counter!(
        METRIC_CONNECTIVITY_CHECKS,
        "Total number of settled connectivity checks"
    );
    describe_counter!(
        METRIC_STALE_CHECKS,
        "Connectivity check results discarded because a newer check was triggered"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus exporter listening on `0.0.0.0:port`.
pub fn install_exporter(port: u16) -> Result<(), DashboardError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| DashboardError::Metrics(e.to_string()))?;
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Record one client request and its latency.
pub fn record_api_request(start: Instant, endpoint: &'static str, outcome: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_API_REQUEST_LATENCY, "endpoint" => endpoint).record(latency_ms);
    counter!(METRIC_API_REQUESTS, "endpoint" => endpoint, "outcome" => outcome).increment(1);
}

/// Increment settled connectivity checks counter.
pub fn inc_connectivity_checks(outcome: &'static str) {
    counter!(METRIC_CONNECTIVITY_CHECKS, "outcome" => outcome).increment(1);
}

/// Increment stale check counter.
pub fn inc_stale_checks() {
    counter!(METRIC_STALE_CHECKS).increment(1);
}
