//! Keyword extraction - cheap similarity fingerprints for complaints.
//!
//! Reduces free text to a small set of salient terms: tokenize on
//! non-alphabetic boundaries, case-fold, drop stop words, rank by
//! frequency. The result is used by the duplicate-merge resolver as a
//! set, so ordering only matters for the top-N truncation.

use std::collections::HashSet;

use indexmap::IndexMap;

/// Default number of terms kept in a keyword summary.
pub const DEFAULT_MAX_TERMS: usize = 5;

/// Default English stop-word list.
///
/// Deployments for other languages supply their own via
/// [`KeywordExtractor::with_stop_words`].
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further", "had",
    "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most",
    "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours",
];

/// Extracts keyword summaries from complaint text.
///
/// Pure and deterministic given a fixed stop-word list: the same text
/// always produces the same summary.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
    max_terms: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor with the default English stop words and a
    /// five-term summary size.
    pub fn new() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            max_terms: DEFAULT_MAX_TERMS,
        }
    }

    /// Set the maximum number of terms kept in a summary.
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    /// Replace the stop-word list.
    pub fn with_stop_words(mut self, words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.stop_words = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        self
    }

    /// Extract the keyword summary for a text.
    ///
    /// Tokens are maximal alphabetic runs, case-folded. Terms are ranked
    /// by frequency descending; ties keep first-seen order (stable sort).
    /// Empty or stop-word-only input yields an empty vector.
    pub fn extract(&self, text: &str) -> Vec<String> {
        // IndexMap preserves first-seen order for the tie-break.
        let mut freq: IndexMap<String, usize> = IndexMap::new();

        for token in text.split(|c: char| !c.is_alphabetic()) {
            if token.is_empty() {
                continue;
            }
            let token = token.to_lowercase();
            if self.stop_words.contains(&token) {
                continue;
            }
            *freq.entry(token).or_insert(0) += 1;
        }

        let mut ranked: Vec<(String, usize)> = freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.max_terms);
        ranked.into_iter().map(|(term, _)| term).collect()
    }
}

/// Size of the intersection of two keyword summaries, compared as sets.
pub fn summary_overlap(a: &[String], b: &[String]) -> usize {
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    a.iter()
        .map(String::as_str)
        .collect::<HashSet<&str>>()
        .intersection(&b)
        .count()
}
