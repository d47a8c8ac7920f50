// Similarity classification — cosine score to a Similar / Not similar label.

use anyhow::Result;

use crate::nlp::document::Document;

/// Score must exceed this (strictly) to count as Similar.
pub const SIMILARITY_THRESHOLD: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityLabel {
    Similar,
    NotSimilar,
}

impl SimilarityLabel {
    pub fn from_score(score: f64) -> Self {
        if score > SIMILARITY_THRESHOLD {
            SimilarityLabel::Similar
        } else {
            SimilarityLabel::NotSimilar
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityLabel::Similar => "Similar",
            SimilarityLabel::NotSimilar => "Not similar",
        }
    }
}

impl std::fmt::Display for SimilarityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityResult {
    pub score: f64,
    pub label: SimilarityLabel,
}

/// Compare two documents and label the score.
pub fn analyze_similarity(a: &Document, b: &Document) -> Result<SimilarityResult> {
    let score = a.similarity(b)?;
    Ok(SimilarityResult {
        score,
        label: SimilarityLabel::from_score(score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_threshold_is_similar() {
        assert_eq!(SimilarityLabel::from_score(0.66), SimilarityLabel::Similar);
    }

    #[test]
    fn test_threshold_itself_is_not_similar() {
        assert_eq!(SimilarityLabel::from_score(0.65), SimilarityLabel::NotSimilar);
    }

    #[test]
    fn test_negative_score_is_not_similar() {
        assert_eq!(SimilarityLabel::from_score(-0.4), SimilarityLabel::NotSimilar);
    }

    #[test]
    fn test_label_text() {
        assert_eq!(SimilarityLabel::NotSimilar.to_string(), "Not similar");
    }
}
