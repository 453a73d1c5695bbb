// src/report.rs
//! Output types for the analysis pipeline: topic classification, sentiment
//! report, raw-text statistics, and the combined `AnalysisResult`.
//!
//! Field names serialize in camelCase because the browser UI consumes these
//! shapes directly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Topic buckets recognized by the classifier.
///
/// Declaration order is load-bearing: it is the scoring order, the tie-break
/// order (first wins on equal shares), and through the derived `Ord` also the
/// order in which `allScores` maps iterate and serialize. `General` is the
/// fallback bucket and never carries keywords of its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Business,
    Politics,
    Sports,
    Entertainment,
    Health,
    Science,
    General,
}

impl Category {
    /// The seven keyword-bearing buckets, in scoring order.
    pub const KEYWORD_CATEGORIES: [Category; 7] = [
        Category::Technology,
        Category::Business,
        Category::Politics,
        Category::Sports,
        Category::Entertainment,
        Category::Health,
        Category::Science,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Politics => "politics",
            Category::Sports => "sports",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-way sentiment verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Raw classifier output: the winning bucket plus the full share map.
/// Internal to the pipeline; only [`CategoryReport`] crosses the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub category: Category,
    /// Reported band is 50..=95; 95 also covers the no-keyword fallback.
    pub confidence: u8,
    /// Normalized share per keyword category, rounded to two decimals.
    /// Always lists exactly the seven keyword buckets; `General` never
    /// appears as a key. All-zero when nothing matched.
    pub scores: BTreeMap<Category, f64>,
}

/// Classification section of the wire result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    pub name: Category,
    pub confidence: u8,
    pub all_scores: BTreeMap<Category, f64>,
}

impl From<Classification> for CategoryReport {
    fn from(c: Classification) -> Self {
        Self {
            name: c.category,
            confidence: c.confidence,
            all_scores: c.scores,
        }
    }
}

/// Sentiment section of the wire result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub label: SentimentLabel,
    /// 0..=100 with 50 as the neutral midpoint.
    pub score: u8,
    pub positive_words: usize,
    pub negative_words: usize,
}

impl SentimentReport {
    /// Midpoint report for text without a single polarity hit.
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 50,
            positive_words: 0,
            negative_words: 0,
        }
    }
}

/// Counts taken from the raw text, before tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: usize,
}

/// Everything the pipeline produces for one article. Immutable once built;
/// every call returns a fresh instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: CategoryReport,
    pub summary: String,
    pub sentiment: SentimentReport,
    pub stats: TextStats,
}
