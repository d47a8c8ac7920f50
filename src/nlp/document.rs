// Document — the parsed form of a piece of review text.
//
// A document is the normalized text, its tokens (each flagged as stop-word
// or not), and a vector used for similarity. Which kind of vector depends
// on the language model that produced it: term counts for the lexical
// model, a dense sentence embedding for the ONNX model.

use std::collections::{HashMap, HashSet};

use anyhow::Result;

/// A single token and whether the model's stop list covers it.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub is_stop: bool,
}

/// The vector a document exposes for similarity comparisons.
#[derive(Debug, Clone)]
pub enum DocVector {
    /// Term frequency map (keyword -> count).
    Terms(HashMap<String, f64>),
    /// Dense embedding.
    Dense(Vec<f64>),
}

/// Parsed review text supporting similarity and sentiment queries.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
    vector: DocVector,
}

impl Document {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>, vector: DocVector) -> Self {
        Self {
            text: text.into(),
            tokens,
            vector,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn vector(&self) -> &DocVector {
        &self.vector
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token texts that are not stop-words, in document order.
    pub fn content_words(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| !t.is_stop)
            .map(|t| t.text.as_str())
    }

    /// Cosine similarity between this document's vector and another's.
    ///
    /// Term vectors score in [0, 1]; dense vectors in [-1, 1]. An empty
    /// document scores 0.0 against anything, whatever vector the model gave
    /// it. Comparing vectors of different kinds or dimensions is an error.
    pub fn similarity(&self, other: &Document) -> Result<f64> {
        // Embedding models still produce a vector for no tokens at all.
        if self.is_empty() || other.is_empty() {
            return Ok(0.0);
        }
        match (&self.vector, &other.vector) {
            (DocVector::Terms(a), DocVector::Terms(b)) => Ok(cosine_from_terms(a, b)),
            (DocVector::Dense(a), DocVector::Dense(b)) => {
                if a.len() != b.len() {
                    anyhow::bail!(
                        "cannot compare embeddings of different dimensions ({} vs {})",
                        a.len(),
                        b.len()
                    );
                }
                Ok(cosine_dense(a, b))
            }
            _ => anyhow::bail!(
                "cannot compare documents produced by different language models"
            ),
        }
    }
}

/// Cosine similarity between two term weight maps.
///
/// Weights are non-negative, so the result is in [0, 1].
pub fn cosine_from_terms(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let keys: HashSet<&String> = a.keys().chain(b.keys()).collect();

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;
    for key in keys {
        let wa = a.get(key).copied().unwrap_or(0.0);
        let wb = b.get(key).copied().unwrap_or(0.0);
        dot += wa * wb;
        mag_a += wa * wa;
        mag_b += wb * wb;
    }

    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(0.0, 1.0)
    }
}

/// Cosine similarity between two equal-length dense vectors, in [-1, 1].
pub fn cosine_dense(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn token(text: &str, is_stop: bool) -> Token {
        Token {
            text: text.to_string(),
            is_stop,
        }
    }

    #[test]
    fn test_cosine_terms_identical() {
        let a = terms(&[("great", 2.0), ("product", 1.0)]);
        assert!((cosine_from_terms(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_terms_disjoint() {
        let a = terms(&[("great", 1.0)]);
        let b = terms(&[("broken", 1.0)]);
        assert!(cosine_from_terms(&a, &b).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cosine_terms_empty() {
        let empty = HashMap::new();
        assert!(cosine_from_terms(&empty, &empty).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cosine_dense_opposite_is_negative() {
        let sim = cosine_dense(&[1.0, 0.0], &[-1.0, 0.0]);
        assert!((sim + 1.0).abs() < 1e-9, "expected -1.0, got {sim}");
    }

    #[test]
    fn test_cosine_dense_zero_vector() {
        assert!(cosine_dense(&[0.0, 0.0], &[1.0, 2.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_similarity_rejects_mixed_vectors() {
        let a = Document::new("a", vec![token("a", false)], DocVector::Terms(terms(&[("a", 1.0)])));
        let b = Document::new("b", vec![token("b", false)], DocVector::Dense(vec![1.0]));
        assert!(a.similarity(&b).is_err());
    }

    #[test]
    fn test_similarity_rejects_mismatched_dimensions() {
        let a = Document::new("a", vec![token("a", false)], DocVector::Dense(vec![1.0, 0.0]));
        let b = Document::new("b", vec![token("b", false)], DocVector::Dense(vec![1.0]));
        assert!(a.similarity(&b).is_err());
    }

    #[test]
    fn test_empty_document_scores_zero_even_with_dense_vector() {
        let empty = Document::new("", vec![], DocVector::Dense(vec![0.3, 0.7]));
        let full = Document::new("great", vec![token("great", false)], DocVector::Dense(vec![0.3, 0.7]));
        assert_eq!(empty.similarity(&full).unwrap(), 0.0);
        assert_eq!(full.similarity(&empty).unwrap(), 0.0);
        assert_eq!(empty.similarity(&empty).unwrap(), 0.0);
    }

    #[test]
    fn test_content_words_skips_stop_tokens() {
        let doc = Document::new(
            "great product loved it",
            vec![
                token("great", false),
                token("product", false),
                token("loved", false),
                token("it", true),
            ],
            DocVector::Terms(HashMap::new()),
        );
        let words: Vec<&str> = doc.content_words().collect();
        assert_eq!(words, vec!["great", "product", "loved"]);
    }
}
