// src/history.rs
//! Bounded in-memory log of recent analyses, surfaced on the debug routes.
//!
//! Entries carry derived numbers and an anonymized text id only; raw article
//! text never lands here.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::report::{AnalysisResult, Category, SentimentLabel};

/// Fingerprint of one analysis: enough for diagnostics, nothing to leak.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub ts_unix: u64,
    /// Anonymized id of the analyzed text (short hex digest).
    pub id: String,
    pub category: Category,
    pub confidence: u8,
    pub sentiment: SentimentLabel,
    pub sentiment_score: u8,
    pub word_count: usize,
}

impl HistoryEntry {
    pub fn from_result(id: String, result: &AnalysisResult) -> Self {
        Self {
            ts_unix: now_unix(),
            id,
            category: result.category.name,
            confidence: result.category.confidence,
            sentiment: result.sentiment.label,
            sentiment_score: result.sentiment.score,
            word_count: result.stats.word_count,
        }
    }
}

#[derive(Debug)]
pub struct History {
    inner: Mutex<Vec<HistoryEntry>>,
    cap: usize,
}

impl History {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(10_000))),
            cap: cap.min(10_000),
        }
    }

    pub fn push(&self, entry: HistoryEntry) {
        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    /// Last `n` entries, oldest first.
    pub fn snapshot_last_n(&self, n: usize) -> Vec<HistoryEntry> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let start = v.len().saturating_sub(n);
        v[start..].to_vec()
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
