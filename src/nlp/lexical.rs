// Lexical language model — whitespace tokenization and term-count vectors.
//
// The default backend. No model files, no network. Similarity between two
// documents is the cosine of their term counts, so reviews that share words
// score high and reviews with disjoint vocabulary score 0.0.

use std::collections::HashMap;

use anyhow::Result;

use super::document::{DocVector, Document, Token};
use super::traits::LanguageModel;
use crate::text::stopwords::StopWords;

/// Split text on whitespace and flag stop-words.
///
/// Matching is case-insensitive; token text keeps its original case.
pub fn tokenize(text: &str, stop_words: &StopWords) -> Vec<Token> {
    text.split_whitespace()
        .map(|word| Token {
            text: word.to_string(),
            is_stop: stop_words.is_stop(&word.to_lowercase()),
        })
        .collect()
}

/// Count occurrences of each (lowercased) token.
pub fn term_frequencies(tokens: &[Token]) -> HashMap<String, f64> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.text.to_lowercase()).or_insert(0.0) += 1.0;
    }
    counts
}

pub struct LexicalModel {
    stop_words: StopWords,
}

impl LexicalModel {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }
}

impl LanguageModel for LexicalModel {
    fn name(&self) -> &str {
        "lexical"
    }

    fn parse(&self, text: &str) -> Result<Document> {
        let tokens = tokenize(text, &self.stop_words);
        let vector = DocVector::Terms(term_frequencies(&tokens));
        Ok(Document::new(text, tokens, vector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LexicalModel {
        LexicalModel::new(StopWords::from_words(["it", "the", "and"]))
    }

    #[test]
    fn test_tokenize_flags_stop_words() {
        let tokens = tokenize("loved it and the color", &StopWords::from_words(["it", "the", "and"]));
        let flags: Vec<bool> = tokens.iter().map(|t| t.is_stop).collect();
        assert_eq!(flags, vec![false, true, true, true, false]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let tokens = tokenize("  great \t  product\n", &StopWords::from_words(Vec::<String>::new()));
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["great", "product"]);
    }

    #[test]
    fn test_term_frequencies_counts_repeats() {
        let tokens = tokenize("good good value", &StopWords::from_words(["the"]));
        let tf = term_frequencies(&tokens);
        assert!((tf["good"] - 2.0).abs() < f64::EPSILON);
        assert!((tf["value"] - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_identical_texts_fully_similar() {
        let m = model();
        let a = m.parse("battery lasts forever").unwrap();
        let b = m.parse("battery lasts forever").unwrap();
        assert!((a.similarity(&b).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_empty_text() {
        let doc = model().parse("").unwrap();
        assert!(doc.is_empty());
    }
}
