// src/summarize.rs
//! Frequency-weighted extractive summarizer: strict sentence split, token
//! frequency scoring with position bonuses, top-N selection restored to
//! reading order.

use std::cmp::Ordering;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Lexicon;
use crate::token::tokenize;

// Sentence boundary for summarization: a terminator directly followed by
// whitespace. A bare terminator ("3.14", a trailing period at end of input)
// does not split.
static BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").expect("boundary regex"));

/// Trimmed pieces at or below this length never enter the candidate pool.
const MIN_SENTENCE_CHARS: usize = 20;
/// Candidates shorter than this are damped even when they rank well.
const SHORT_SENTENCE_CHARS: usize = 40;

struct ScoredSentence {
    sentence: String,
    score: f64,
    index: usize,
}

/// Extract up to `target` sentences (clamped to at least one) and join them
/// with single spaces in their original order. Texts with no more eligible
/// sentences than the target come back whole.
pub fn summarize(text: &str, target: usize, lexicon: &Lexicon) -> String {
    let target = target.max(1);
    let sentences = split_sentences(text);

    if sentences.len() <= target {
        return sentences.join(" ");
    }

    // Token frequencies over the whole text, not per sentence.
    let mut freq: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text, lexicon) {
        *freq.entry(token).or_insert(0) += 1;
    }

    let count = sentences.len();
    let mut scored: Vec<ScoredSentence> = sentences
        .into_iter()
        .enumerate()
        .map(|(index, sentence)| {
            let score = sentence_score(&sentence, index, count, &freq, lexicon);
            ScoredSentence {
                sentence,
                score,
                index,
            }
        })
        .collect();

    // Stable sort keeps earlier sentences ahead on exact score ties.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(target);

    // Back to reading order.
    scored.sort_by_key(|s| s.index);

    let picked: Vec<String> = scored.into_iter().map(|s| s.sentence).collect();
    picked.join(" ")
}

/// Mean full-text frequency of the sentence's tokens, shaped by position:
/// the opening sentence leads, the closing sentence and the first three get
/// smaller bonuses, and short sentences are damped on top of either.
fn sentence_score(
    sentence: &str,
    index: usize,
    count: usize,
    freq: &HashMap<String, usize>,
    lexicon: &Lexicon,
) -> f64 {
    let tokens = tokenize(sentence, lexicon);

    let hits: usize = tokens
        .iter()
        .map(|t| freq.get(t.as_str()).copied().unwrap_or(0))
        .sum();
    let mut score = hits as f64 / tokens.len().max(1) as f64;

    if index == 0 {
        score *= 1.5;
    } else if index == count - 1 {
        score *= 1.2;
    } else if index < 3 {
        score *= 1.1;
    }

    if sentence.chars().count() < SHORT_SENTENCE_CHARS {
        score *= 0.8;
    }

    score
}

/// Strict split: cut after each terminator that is followed by whitespace,
/// trim the pieces, keep only those longer than `MIN_SENTENCE_CHARS`.
fn split_sentences(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut prev = 0;
    for m in BOUNDARY.find_iter(text) {
        // keep the terminator with its sentence, drop the whitespace
        pieces.push(&text[prev..m.start() + 1]);
        prev = m.end();
    }
    pieces.push(&text[prev..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}
