//! Rule-based linguistic analysis.
//!
//! Splits text into sentences and tokens and attaches the attributes the
//! summarizer and keyword extractor consume: a lowercased normal form, an
//! alphabetic flag, a stopword flag, and a coarse part-of-speech tag.
//!
//! Sentence boundaries are terminal punctuation (`.`, `!`, `?`); a period
//! between two digits is a decimal point, not a boundary. The tagger is a
//! heuristic, not a model: adjectives by common suffix, proper nouns by
//! mid-sentence capitalization, `-ly` adverbs excluded, and remaining
//! alphabetic content words default to the nominal reading. The pipeline
//! needs stable nominal/adjectival candidates, not treebank accuracy.
//!
//! An [`Analyzer`] is built once at startup and shared immutably across
//! workers; `analyze` takes `&self` and holds no mutable state.

use std::collections::HashSet;

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Adjective,
    /// Stopwords, adverbs, non-alphabetic tokens, and anything else the
    /// keyword filter should ignore.
    Other,
}

/// A single token with the attributes used downstream.
#[derive(Debug, Clone)]
pub struct Token {
    /// Surface form with surrounding punctuation stripped.
    pub surface: String,
    /// Lowercased surface form.
    pub norm: String,
    pub is_alpha: bool,
    pub is_stop: bool,
    pub pos: PartOfSpeech,
}

/// One sentence: its verbatim text and its ordered tokens.
#[derive(Debug, Clone)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Analyzer output for one document. Ephemeral; never persisted.
#[derive(Debug, Clone, Default)]
pub struct AnalyzedDoc {
    pub sentences: Vec<Sentence>,
}

impl AnalyzedDoc {
    /// All tokens across all sentences, in document order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }
}

/// Shared, immutable linguistic analyzer.
pub struct Analyzer {
    stopwords: HashSet<&'static str>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            stopwords: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Split `text` into sentences and tag every token.
    pub fn analyze(&self, text: &str) -> AnalyzedDoc {
        let sentences = split_sentences(text)
            .into_iter()
            .map(|text| {
                let tokens = self.tokenize(&text);
                Sentence { text, tokens }
            })
            .collect();
        AnalyzedDoc { sentences }
    }

    fn tokenize(&self, sentence: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for raw in sentence.split_whitespace() {
            let core = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if core.is_empty() {
                continue;
            }
            let is_alpha = core.chars().all(|c| c.is_alphabetic());
            let norm = core.to_lowercase();
            let is_stop = self.stopwords.contains(norm.as_str());
            let pos = tag(core, &norm, is_alpha, is_stop, tokens.is_empty());
            tokens.push(Token {
                surface: core.to_string(),
                norm,
                is_alpha,
                is_stop,
                pos,
            });
        }
        tokens
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn tag(
    surface: &str,
    norm: &str,
    is_alpha: bool,
    is_stop: bool,
    sentence_initial: bool,
) -> PartOfSpeech {
    if !is_alpha || is_stop {
        return PartOfSpeech::Other;
    }
    // Derived adverbs ("quickly"); short -ly words are usually not ("fly").
    if norm.ends_with("ly") && norm.len() > 4 {
        return PartOfSpeech::Other;
    }
    // Capitalization only signals a proper noun away from the sentence start.
    if !sentence_initial && surface.chars().next().is_some_and(|c| c.is_uppercase()) {
        return PartOfSpeech::ProperNoun;
    }
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|s| norm.len() > s.len() + 1 && norm.ends_with(s))
    {
        return PartOfSpeech::Adjective;
    }
    PartOfSpeech::Noun
}

/// Split on `.`, `!`, `?`. A period with digits on both sides is part of a
/// number and does not end the sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for i in 0..chars.len() {
        let ch = chars[i];
        current.push(ch);

        let boundary = match ch {
            '!' | '?' => true,
            '.' => {
                let prev_is_digit = i > 0 && chars[i - 1].is_ascii_digit();
                let next_is_digit = i + 1 < chars.len() && chars[i + 1].is_ascii_digit();
                !(prev_is_digit && next_is_digit)
            }
            _ => false,
        };

        if boundary {
            flush_sentence(&mut sentences, &mut current);
        }
    }

    // Trailing text without terminal punctuation still forms a sentence.
    flush_sentence(&mut sentences, &mut current);

    sentences
}

fn flush_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if trimmed.chars().count() > 1 {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ic", "ish", "less", "est",
];

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "back", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during",
    "each", "even", "few", "for", "from", "further", "get", "had", "has", "have", "having", "he",
    "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "just", "like", "may", "me", "might", "more", "most", "must", "my", "no", "nor", "not", "now",
    "of", "off", "on", "once", "one", "only", "or", "other", "our", "ours", "out", "over", "own",
    "same", "shall", "she", "should", "so", "some", "still", "such", "than", "that", "the",
    "their", "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "upon", "us", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let analyzer = Analyzer::new();
        let doc = analyzer.analyze("First sentence. Second one! Third one?");
        let texts: Vec<&str> = doc.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["First sentence.", "Second one!", "Third one?"]);
    }

    #[test]
    fn decimal_point_is_not_a_boundary() {
        let analyzer = Analyzer::new();
        let doc = analyzer.analyze("Revenue grew 3.5 percent. Costs fell.");
        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(doc.sentences[0].text, "Revenue grew 3.5 percent.");
    }

    #[test]
    fn trailing_text_without_punctuation_is_a_sentence() {
        let analyzer = Analyzer::new();
        let doc = analyzer.analyze("An unterminated thought");
        assert_eq!(doc.sentences.len(), 1);
        assert_eq!(doc.sentences[0].text, "An unterminated thought");
    }

    #[test]
    fn empty_text_has_no_sentences() {
        let analyzer = Analyzer::new();
        assert!(analyzer.analyze("").sentences.is_empty());
        assert!(analyzer.analyze("   \n ").sentences.is_empty());
    }

    #[test]
    fn tokens_are_normalized_and_flagged() {
        let analyzer = Analyzer::new();
        let doc = analyzer.analyze("The cats, surprisingly, slept.");
        let tokens = &doc.sentences[0].tokens;
        let norms: Vec<&str> = tokens.iter().map(|t| t.norm.as_str()).collect();
        assert_eq!(norms, vec!["the", "cats", "surprisingly", "slept"]);
        assert!(tokens[0].is_stop);
        assert!(!tokens[1].is_stop);
        assert!(tokens.iter().all(|t| t.is_alpha));
    }

    #[test]
    fn numbers_are_not_alphabetic() {
        let analyzer = Analyzer::new();
        let doc = analyzer.analyze("Chapter 42 begins");
        let token = &doc.sentences[0].tokens[1];
        assert_eq!(token.norm, "42");
        assert!(!token.is_alpha);
        assert_eq!(token.pos, PartOfSpeech::Other);
    }

    #[test]
    fn mid_sentence_capital_is_proper_noun() {
        let analyzer = Analyzer::new();
        let doc = analyzer.analyze("We visited Paris yesterday");
        let paris = doc
            .tokens()
            .find(|t| t.norm == "paris")
            .expect("token present");
        assert_eq!(paris.pos, PartOfSpeech::ProperNoun);
    }

    #[test]
    fn sentence_initial_capital_is_not_proper_noun() {
        let analyzer = Analyzer::new();
        let doc = analyzer.analyze("Cats sleep");
        assert_eq!(doc.sentences[0].tokens[0].pos, PartOfSpeech::Noun);
    }

    #[test]
    fn adjective_suffixes_are_tagged() {
        let analyzer = Analyzer::new();
        let doc = analyzer.analyze("a famous and useful invention");
        let famous = doc.tokens().find(|t| t.norm == "famous").unwrap();
        let useful = doc.tokens().find(|t| t.norm == "useful").unwrap();
        assert_eq!(famous.pos, PartOfSpeech::Adjective);
        assert_eq!(useful.pos, PartOfSpeech::Adjective);
    }

    #[test]
    fn derived_adverbs_are_excluded() {
        let analyzer = Analyzer::new();
        let doc = analyzer.analyze("it moved quickly");
        let quickly = doc.tokens().find(|t| t.norm == "quickly").unwrap();
        assert_eq!(quickly.pos, PartOfSpeech::Other);
    }

    #[test]
    fn stopwords_are_tagged_other() {
        let analyzer = Analyzer::new();
        let doc = analyzer.analyze("the dog and the bone");
        let the = doc.tokens().find(|t| t.norm == "the").unwrap();
        assert_eq!(the.pos, PartOfSpeech::Other);
    }
}
