//! Part-of-speech-filtered keyword extraction.
//!
//! The full text is lowercased before analysis, then nominal and adjectival
//! non-stopword tokens are counted in first-encountered order. Lowercasing
//! first weakens capitalization-based proper-noun tagging, so most
//! candidates arrive through the default nominal reading; the original
//! behavior is preserved rather than corrected.

use indexmap::IndexMap;

use crate::analyze::{Analyzer, PartOfSpeech};

/// Maximum number of keywords returned per document.
pub const KEYWORD_LIMIT: usize = 10;

/// Return up to [`KEYWORD_LIMIT`] distinct terms ranked by descending
/// frequency, ties broken by first-encountered order.
pub fn extract_keywords(analyzer: &Analyzer, text: &str) -> Vec<String> {
    let doc = analyzer.analyze(&text.to_lowercase());

    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for token in doc.tokens() {
        if token.is_stop {
            continue;
        }
        match token.pos {
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Adjective => {
                *counts.entry(token.surface.clone()).or_insert(0) += 1;
            }
            PartOfSpeech::Other => {}
        }
    }

    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    // Stable sort: equal counts keep insertion order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(KEYWORD_LIMIT)
        .map(|(term, _)| term)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excludes_stopwords_and_keeps_content_words() {
        let analyzer = Analyzer::new();
        let keywords = extract_keywords(&analyzer, "The quick brown fox jumps over the lazy dog.");
        assert!(!keywords.contains(&"the".to_string()));
        assert!(!keywords.contains(&"over".to_string()));
        for expected in ["quick", "brown", "fox", "lazy", "dog"] {
            assert!(
                keywords.contains(&expected.to_string()),
                "missing {expected:?} in {keywords:?}"
            );
        }
    }

    #[test]
    fn ranked_by_frequency_then_first_seen() {
        let analyzer = Analyzer::new();
        let keywords = extract_keywords(
            &analyzer,
            "Storage engines cache pages. Storage engines flush pages. Caches help.",
        );
        assert_eq!(keywords[0], "storage");
        assert_eq!(keywords[1], "engines");
        assert_eq!(keywords[2], "pages");
    }

    #[test]
    fn returns_at_most_ten_distinct_terms() {
        let analyzer = Analyzer::new();
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu. \
                    alpha beta gamma.";
        let keywords = extract_keywords(&analyzer, text);
        assert_eq!(keywords.len(), KEYWORD_LIMIT);
        let mut deduped = keywords.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), keywords.len());
    }

    #[test]
    fn counts_are_case_insensitive_via_prior_lowercasing() {
        let analyzer = Analyzer::new();
        let keywords = extract_keywords(&analyzer, "Cats chase mice. cats chase birds.");
        assert_eq!(keywords[0], "cats");
        assert_eq!(keywords[1], "chase");
    }

    #[test]
    fn empty_text_yields_no_keywords() {
        let analyzer = Analyzer::new();
        assert!(extract_keywords(&analyzer, "").is_empty());
    }

    #[test]
    fn non_alphabetic_tokens_are_ignored() {
        let analyzer = Analyzer::new();
        let keywords = extract_keywords(&analyzer, "Version 2 shipped 14 fixes.");
        assert!(!keywords.contains(&"2".to_string()));
        assert!(!keywords.contains(&"14".to_string()));
    }
}
