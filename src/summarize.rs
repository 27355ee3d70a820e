//! Frequency-based extractive summarizer.
//!
//! Every sentence is scored by the summed document-wide frequency of its
//! alphabetic, non-stopword terms; the top sentences are joined by a single
//! space. Selected sentences appear in rank order, not document order.
//! Scores are raw counts with no length normalization, so a short sentence
//! packed with frequent terms can outrank a long one.

use indexmap::IndexMap;

use crate::analyze::{AnalyzedDoc, Analyzer};

/// Default number of sentences in a summary.
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Summarize `text` down to at most `sentence_count` sentences.
///
/// Empty or unanalyzable text yields an empty summary.
pub fn summarize(analyzer: &Analyzer, text: &str, sentence_count: usize) -> String {
    let doc = analyzer.analyze(text);
    summarize_doc(&doc, sentence_count)
}

/// Summarize an already-analyzed document.
pub fn summarize_doc(doc: &AnalyzedDoc, sentence_count: usize) -> String {
    let frequencies = term_frequencies(doc);

    // A sentence enters the score table on its first matching token, so
    // ties later resolve in first-scored order. Sentences whose tokens
    // never match (all stopwords or punctuation) are never candidates.
    let mut scores: IndexMap<&str, u64> = IndexMap::new();
    for sentence in &doc.sentences {
        for token in &sentence.tokens {
            if let Some(&freq) = frequencies.get(token.norm.as_str()) {
                *scores.entry(sentence.text.as_str()).or_insert(0) += freq;
            }
        }
    }

    let mut ranked: Vec<(&str, u64)> = scores.into_iter().collect();
    // Stable sort: equal scores keep insertion order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .iter()
        .take(sentence_count)
        .map(|(text, _)| *text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Term-frequency table over alphabetic, non-stopword tokens, keyed by the
/// case-insensitive normal form, in first-encountered order.
pub fn term_frequencies(doc: &AnalyzedDoc) -> IndexMap<String, u64> {
    let mut table: IndexMap<String, u64> = IndexMap::new();
    for token in doc.tokens() {
        if token.is_alpha && !token.is_stop {
            *table.entry(token.norm.clone()).or_insert(0) += 1;
        }
    }
    table
}
