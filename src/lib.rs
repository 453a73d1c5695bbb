// src/lib.rs
//! Keyword-driven article analysis: topic classification, lexicon sentiment,
//! extractive summarization, and length statistics behind a small Axum API.
//!
//! The core is [`pipeline::analyze`], a pure synchronous function of the
//! input text and the built-in lexicons. Everything network-facing lives in
//! [`api`]; the pipeline itself does no I/O.

pub mod api;
pub mod classify;
pub mod history;
pub mod lexicon;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod rolling;
pub mod sentiment;
pub mod summarize;
pub mod token;

// ---- Re-exports for the stable public surface ----
pub use crate::api::{create_router, router};
pub use crate::pipeline::{analyze, ArticleAnalyzer};
pub use crate::report::AnalysisResult;

/// Full in-process service: API routes plus the Prometheus `/metrics` route.
/// Installs the metrics recorder on first call; safe to call repeatedly.
pub fn app() -> axum::Router {
    let metrics = metrics::Metrics::init();
    api::create_router().merge(metrics.router())
}
