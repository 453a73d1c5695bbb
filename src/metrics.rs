// src/metrics.rs
//! Prometheus recorder and the `/metrics` exposition route.

use axum::{routing::get, Router};
use metrics::{describe_counter, describe_gauge, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

// The recorder is process-global; keep the handle around so repeated
// `Metrics::init()` calls (tests build the app more than once) reuse it.
static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

// Without explicit buckets the exporter renders histograms as quantile
// summaries. The pipeline is in-memory, so the ladder stays under a second.
const DURATION_BUCKETS_MS: [f64; 10] = [0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0];

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder on first call and register the series
    /// descriptions (so they show up on /metrics with HELP text).
    pub fn init() -> Self {
        let handle = HANDLE
            .get_or_init(|| {
                let handle = PrometheusBuilder::new()
                    .set_buckets_for_metric(
                        Matcher::Full("analyze_duration_ms".to_string()),
                        &DURATION_BUCKETS_MS,
                    )
                    .expect("prometheus: histogram buckets")
                    .install_recorder()
                    .expect("prometheus: install recorder");

                describe_counter!(
                    "analyze_requests_total",
                    "Articles analyzed via /analyze and /batch."
                );
                describe_counter!(
                    "analyze_rejected_total",
                    "Requests rejected by the minimum-length gate."
                );
                describe_counter!(
                    "analyze_category_total",
                    "Analyzed articles by winning category."
                );
                describe_histogram!(
                    "analyze_duration_ms",
                    "Pipeline wall time per article in milliseconds."
                );
                describe_gauge!(
                    "analyze_min_chars",
                    "Configured minimum article length in characters."
                );

                handle
            })
            .clone();

        Self { handle }
    }

    /// Router exposing `/metrics` in the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
