// src/pipeline.rs
//! Pipeline orchestrator: runs the classifier, sentiment scorer, and
//! summarizer independently over the same input and merges their outputs
//! with raw-text statistics into one `AnalysisResult`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::classify;
use crate::lexicon::Lexicon;
use crate::report::{AnalysisResult, TextStats};
use crate::sentiment::score_text;
use crate::summarize::summarize;

/// Fixed summary length for the standard report.
pub const SUMMARY_SENTENCES: usize = 3;

// Permissive sentence counter for statistics: any run of terminators ends a
// sentence, whitespace follower or not. Intentionally looser than the
// summarizer's split, so the two counts can disagree.
static TERMINATOR_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("stats regex"));

/// Analyze one article. Pure and total: any string, including the empty one,
/// produces a complete result. Minimum-length rules belong to callers.
pub fn analyze(text: &str) -> AnalysisResult {
    let lexicon = Lexicon::shared();
    AnalysisResult {
        category: classify(text, lexicon).into(),
        summary: summarize(text, SUMMARY_SENTENCES, lexicon),
        sentiment: score_text(text, lexicon),
        stats: text_stats(text),
    }
}

/// Word and sentence counts straight off the raw text, before any
/// normalization or stopword filtering.
pub fn text_stats(text: &str) -> TextStats {
    let word_count = text.split_whitespace().count();
    let sentence_count = TERMINATOR_RUNS
        .split(text)
        .filter(|piece| !piece.trim().is_empty())
        .count();
    let avg = (word_count as f64 / sentence_count.max(1) as f64).round() as usize;
    TextStats {
        word_count,
        sentence_count,
        avg_words_per_sentence: avg,
    }
}

/// Handle for service state; the pipeline itself is stateless.
#[derive(Debug, Clone, Default)]
pub struct ArticleAnalyzer;

impl ArticleAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        analyze(text)
    }
}
