// src/sentiment.rs
//! Lexicon sentiment scorer: counts polarity hits over the token stream and
//! maps the balance onto a 0..=100 score with a three-way label.

use crate::lexicon::Lexicon;
use crate::report::{SentimentLabel, SentimentReport};
use crate::token::tokenize;

/// Balances beyond +/- this leave the neutral band. The comparison is
/// strict, so a balance of exactly 0.2 stays neutral.
const LABEL_THRESHOLD: f64 = 0.2;

/// Score one text. Only polarity hits count; words outside both
/// vocabularies dilute nothing.
pub fn score_text(text: &str, lexicon: &Lexicon) -> SentimentReport {
    let tokens = tokenize(text, lexicon);

    let mut positive = 0usize;
    let mut negative = 0usize;
    for token in &tokens {
        if lexicon.positive.contains(token.as_str()) {
            positive += 1;
        }
        if lexicon.negative.contains(token.as_str()) {
            negative += 1;
        }
    }

    let total = positive + negative;
    if total == 0 {
        return SentimentReport::neutral();
    }

    let raw = (positive as f64 - negative as f64) / total as f64;
    let label = if raw > LABEL_THRESHOLD {
        SentimentLabel::Positive
    } else if raw < -LABEL_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    SentimentReport {
        label,
        // raw sits in [-1, 1]; shift and scale onto 0..=100
        score: ((raw + 1.0) * 50.0).round() as u8,
        positive_words: positive,
        negative_words: negative,
    }
}
