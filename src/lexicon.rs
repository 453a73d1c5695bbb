// src/lexicon.rs
//! Embedded word tables: stopwords, per-category keyword lists, and the
//! positive/negative sentiment vocabulary.
//!
//! All three tables ship inside the binary (`include_str!`) and parse once at
//! first use. They are read-only for the life of the process; components take
//! them by `&Lexicon` reference.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;

use crate::report::Category;

static LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    let stopwords: HashSet<String> =
        serde_json::from_str(include_str!("../lexicons/stopwords.json"))
            .expect("valid stopword lexicon");
    let categories: Vec<CategoryKeywords> =
        serde_json::from_str(include_str!("../lexicons/categories.json"))
            .expect("valid category lexicon");
    let sentiment: SentimentWords =
        serde_json::from_str(include_str!("../lexicons/sentiment.json"))
            .expect("valid sentiment lexicon");

    // The file order is the scoring and tie-break order.
    let declared: Vec<Category> = categories.iter().map(|c| c.category).collect();
    assert_eq!(
        declared,
        Category::KEYWORD_CATEGORIES.to_vec(),
        "category lexicon must list every keyword category in scoring order"
    );

    Lexicon {
        stopwords,
        categories,
        positive: sentiment.positive,
        negative: sentiment.negative,
    }
});

/// Keyword list for a single topic bucket. A few entries are multi-word
/// ("world cup", "social media"); tokens only ever reach those through the
/// classifier's substring test.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryKeywords {
    pub category: Category,
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SentimentWords {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

/// The full set of word tables used across the pipeline.
#[derive(Debug)]
pub struct Lexicon {
    pub stopwords: HashSet<String>,
    pub categories: Vec<CategoryKeywords>,
    pub positive: HashSet<String>,
    pub negative: HashSet<String>,
}

impl Lexicon {
    /// Process-wide shared instance, parsed on first call.
    pub fn shared() -> &'static Lexicon {
        &LEXICON
    }

    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}
