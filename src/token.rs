// src/token.rs
//! Tokenizer/normalizer: raw text to the filtered word sequence every scorer
//! consumes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Lexicon;

// Maximal runs of word characters in the lowercased input. Everything else,
// punctuation included, acts as a separator.
static WORD_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9a-z_]+").expect("token regex"));

/// Tokens must be longer than two characters. "ai" and "tv" therefore never
/// match a keyword exactly; they only fire as substrings of longer tokens.
const MIN_TOKEN_LEN: usize = 3;

/// Lowercase, split into word runs, drop short tokens and stopwords.
///
/// Order follows the input and duplicates are preserved; the scorers count
/// occurrences. Total over any string: empty input gives an empty vec.
pub fn tokenize(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RUNS
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !lexicon.is_stopword(t))
        .map(str::to_string)
        .collect()
}
