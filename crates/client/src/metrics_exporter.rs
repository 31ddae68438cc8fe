//! Prometheus endpoint for the save-search metrics.
//!
//! Installs a global `metrics` recorder backed by
//! `metrics-exporter-prometheus` and serves `/metrics` on the given address.
//! The save-search metric names are described on install so scrapes carry
//! `# HELP` lines even before the first save.
//!
//! ```rust,ignore
//! let exporter = savesearch_client::MetricsExporter::install("127.0.0.1:9090")?;
//! tracing::info!(addr = %exporter.bind_addr(), "scrape me");
//! ```

use std::net::SocketAddr;

use metrics::{Unit, describe_counter, describe_histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::{
    METRIC_ERRORS_TOTAL, METRIC_REQUEST_DURATION, METRIC_REQUESTS_TOTAL, METRIC_RETRIES_TOTAL,
};

/// Histogram buckets for save latency, in seconds. Saves include 429 backoff,
/// so the tail reaches past the default retry budget.
const SAVE_LATENCY_BUCKETS: &[f64] = &[0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0];

/// Handle for the running exporter.
#[derive(Debug)]
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the recorder and start the HTTP listener.
    ///
    /// Must be called from within a Tokio runtime; the listener is spawned on it.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr = parse_bind_addr(bind_addr)?;

        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
                SAVE_LATENCY_BUCKETS,
            )?
            .with_http_listener(addr)
            .install()
            .map_err(|e| match e {
                BuildError::FailedToSetGlobalRecorder(_) => {
                    MetricsExporterError::RecorderAlreadyInstalled
                }
                other => other.into(),
            })?;

        describe_metrics();
        info!(%addr, "Prometheus metrics exporter listening on /metrics");

        Ok(Self { bind_addr: addr })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn parse_bind_addr(bind_addr: &str) -> Result<SocketAddr, MetricsExporterError> {
    bind_addr
        .trim()
        .parse()
        .map_err(|e| MetricsExporterError::InvalidBindAddress(bind_addr.to_string(), e))
}

fn describe_metrics() {
    describe_histogram!(
        METRIC_REQUEST_DURATION,
        Unit::Seconds,
        "Latency of save-search API requests, including retries"
    );
    describe_counter!(METRIC_REQUESTS_TOTAL, "Save-search API requests by status");
    describe_counter!(METRIC_RETRIES_TOTAL, "Rate-limited save requests that were retried");
    describe_counter!(METRIC_ERRORS_TOTAL, "Failed save requests by error category");
}

/// Errors from installing the exporter.
#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid metrics bind address '{0}': {1}")]
    InvalidBindAddress(String, std::net::AddrParseError),

    #[error("A metrics recorder is already installed")]
    RecorderAlreadyInstalled,

    #[error("Failed to build Prometheus recorder: {0}")]
    BuildError(String),
}

impl From<BuildError> for MetricsExporterError {
    fn from(err: BuildError) -> Self {
        MetricsExporterError::BuildError(err.to_string())
    }
}
