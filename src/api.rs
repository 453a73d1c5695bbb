// src/api.rs
//! HTTP surface over the analysis pipeline.
//!
//! The pipeline itself is pure and never fails; this layer owns everything
//! the caller is responsible for: the minimum-length gate (422), CORS for the
//! browser UI, per-request metrics, and the debug/diagnostic routes. Raw
//! article text is never logged; log lines carry a short anonymized id.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use metrics::{counter, gauge, histogram};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::history::{History, HistoryEntry};
use crate::pipeline::ArticleAnalyzer;
use crate::report::AnalysisResult;
use crate::rolling::RollingWindow;

// --- env defaults & names ---
pub const DEFAULT_MIN_CHARS: usize = 100;
pub const ENV_MIN_CHARS: &str = "ANALYZE_MIN_CHARS";

const HISTORY_CAP: usize = 2_000;
const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<ArticleAnalyzer>,
    history: Arc<History>,
    rolling: Arc<RollingWindow>,
    min_chars: usize,
}

impl AppState {
    /// Resolve the length gate from `ANALYZE_MIN_CHARS` (default 100).
    pub fn from_env() -> Self {
        Self::with_min_chars(parse_min_chars(std::env::var(ENV_MIN_CHARS).ok()))
    }

    pub fn with_min_chars(min_chars: usize) -> Self {
        gauge!("analyze_min_chars").set(min_chars as f64);
        Self {
            analyzer: Arc::new(ArticleAnalyzer::new()),
            history: Arc::new(History::with_capacity(HISTORY_CAP)),
            rolling: Arc::new(RollingWindow::new_24h()),
            min_chars,
        }
    }
}

/// Router with env-derived state, as the binary serves it.
pub fn create_router() -> Router {
    router(AppState::from_env())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/batch", post(analyze_batch))
        .route("/debug/rolling", get(debug_rolling))
        .route("/debug/history", get(debug_history))
        .route("/debug/last", get(debug_last))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

fn parse_min_chars(raw: Option<String>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_MIN_CHARS)
}

/// Short anonymized id for a text, safe to put in logs and history.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    use std::fmt::Write as _;
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in &digest[..6] {
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[derive(Deserialize)]
struct AnalyzeReq {
    text: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// The one client-visible failure: text under the configured minimum.
struct TooShort {
    chars: usize,
    min: usize,
    /// Offending position for batch requests.
    index: Option<usize>,
}

impl IntoResponse for TooShort {
    fn into_response(self) -> Response {
        counter!("analyze_rejected_total").increment(1);
        let error = match self.index {
            Some(i) => format!(
                "item at index {} too short: {} chars, minimum is {}",
                i, self.chars, self.min
            ),
            None => format!(
                "text too short: {} chars, minimum is {}",
                self.chars, self.min
            ),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorBody { error })).into_response()
    }
}

fn check_length(text: &str, min: usize, index: Option<usize>) -> Result<(), TooShort> {
    let chars = text.chars().count();
    if chars < min {
        let id = anon_hash(text);
        info!(target: "api", %id, chars, min, "rejected under-length text");
        return Err(TooShort { chars, min, index });
    }
    Ok(())
}

/// Run the pipeline over one gated text and fan the outcome into history,
/// the rolling window, metrics, and the log.
fn run_analysis(state: &AppState, text: &str) -> AnalysisResult {
    let started = Instant::now();
    let result = state.analyzer.analyze(text);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    let id = anon_hash(text);
    state
        .rolling
        .record(result.sentiment.score, result.category.confidence, None);
    state
        .history
        .push(HistoryEntry::from_result(id.clone(), &result));

    counter!("analyze_requests_total").increment(1);
    counter!("analyze_category_total", "category" => result.category.name.as_str()).increment(1);
    histogram!("analyze_duration_ms").record(elapsed_ms);

    info!(
        target: "api",
        %id,
        category = %result.category.name,
        confidence = result.category.confidence,
        sentiment = %result.sentiment.label,
        words = result.stats.word_count,
        "analyzed"
    );

    result
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalysisResult>, TooShort> {
    check_length(&body.text, state.min_chars, None)?;
    Ok(Json(run_analysis(&state, &body.text)))
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(items): Json<Vec<AnalyzeReq>>,
) -> Result<Json<Vec<AnalysisResult>>, TooShort> {
    // Gate every item before analyzing any, so a 422 never half-applies.
    for (i, item) in items.iter().enumerate() {
        check_length(&item.text, state.min_chars, Some(i))?;
    }
    let results = items
        .iter()
        .map(|item| run_analysis(&state, &item.text))
        .collect();
    Ok(Json(results))
}

#[derive(Serialize)]
struct RollingInfo {
    window_secs: u64,
    count: usize,
    avg_sentiment: f32,
    avg_confidence: f32,
}

async fn debug_rolling(State(state): State<AppState>) -> Json<RollingInfo> {
    let (avg_sentiment, avg_confidence, count) = state.rolling.averages_and_count();
    Json(RollingInfo {
        window_secs: state.rolling.window_secs(),
        count,
        avg_sentiment,
        avg_confidence,
    })
}

#[derive(Deserialize)]
struct HistoryParams {
    limit: Option<usize>,
}

async fn debug_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Json<Vec<HistoryEntry>> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    Json(state.history.snapshot_last_n(limit))
}

async fn debug_last(State(state): State<AppState>) -> Json<Option<HistoryEntry>> {
    Json(state.history.snapshot_last_n(1).pop())
}
