// src/classify.rs
//! Keyword-frequency topic classifier: overlap scoring against the category
//! lexicon, share normalization, and winner selection with a fallback floor.

use std::collections::BTreeMap;

use crate::lexicon::Lexicon;
use crate::report::{Category, Classification};
use crate::token::tokenize;

/// Winning shares below this resolve to `Category::General`.
const GENERAL_FLOOR: f64 = 0.15;
/// Working score assigned to the fallback; lands the confidence at 95.
const GENERAL_WORKING_SCORE: f64 = 0.5;
/// Upper end of the reported confidence band.
const MAX_CONFIDENCE: f64 = 95.0;

/// Classify one text. Total over any string: keyword-free input reports
/// `general` with an all-zero share map.
pub fn classify(text: &str, lexicon: &Lexicon) -> Classification {
    let tokens = tokenize(text, lexicon);

    // Raw overlap per keyword category. An exact hit also passes the
    // substring test against itself, so one token contributes 1.5 for that
    // keyword; the compounding is part of the scoring contract.
    let mut scores: BTreeMap<Category, f64> = BTreeMap::new();
    for entry in &lexicon.categories {
        let mut score = 0.0;
        for token in &tokens {
            if entry.keywords.iter().any(|k| k == token) {
                score += 1.0;
            }
            for keyword in &entry.keywords {
                if token.contains(keyword.as_str()) || keyword.contains(token.as_str()) {
                    score += 0.5;
                }
            }
        }
        scores.insert(entry.category, score);
    }

    // Normalize to shares rounded to two decimals. A zero total leaves every
    // share at 0.0 rather than dividing.
    let total: f64 = scores.values().sum();
    if total > 0.0 {
        for share in scores.values_mut() {
            *share = round2(*share / total);
        }
    }

    // Highest rounded share wins; the strict `>` keeps the earliest category
    // on ties. Shares compare exactly as they are reported.
    let mut winner = Category::General;
    let mut working = 0.0;
    for (category, share) in &scores {
        if *share > working {
            working = *share;
            winner = *category;
        }
    }

    // No strong lead: fall back to the general bucket at a fixed working
    // score. The share map keeps its real values either way.
    if working < GENERAL_FLOOR {
        winner = Category::General;
        working = GENERAL_WORKING_SCORE;
    }

    Classification {
        category: winner,
        confidence: confidence_from(working),
        scores,
    }
}

/// Map a working score in [0, 1] onto the reported 50..=95 band.
#[inline]
fn confidence_from(working: f64) -> u8 {
    (working * 100.0 + 50.0).round().min(MAX_CONFIDENCE) as u8
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
