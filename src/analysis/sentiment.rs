// Sentiment classification — polarity to mood bucket.
//
// The buckets are deliberately asymmetric: it takes a clearly positive
// score to count as Positive, but only a mildly negative one to count as
// Negative. Both comparisons are strict.

use anyhow::Result;

use crate::nlp::document::Document;
use crate::nlp::traits::{PolarityScorer, Sentiment};

/// Polarity must exceed this to be Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.5;
/// Polarity must be below this to be Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Mood::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "Positive",
            Mood::Negative => "Negative",
            Mood::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw sentiment plus its mood bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub mood: Mood,
}

/// Score a document and bucket the polarity.
pub fn analyze_sentiment(doc: &Document, scorer: &dyn PolarityScorer) -> Result<SentimentResult> {
    let sentiment = scorer.score(doc)?;
    Ok(SentimentResult {
        sentiment,
        mood: Mood::from_polarity(sentiment.polarity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clearly_positive() {
        assert_eq!(Mood::from_polarity(0.8), Mood::Positive);
    }

    #[test]
    fn test_positive_boundary_is_neutral() {
        assert_eq!(Mood::from_polarity(0.5), Mood::Neutral);
    }

    #[test]
    fn test_negative_boundary_is_neutral() {
        assert_eq!(Mood::from_polarity(-0.2), Mood::Neutral);
    }

    #[test]
    fn test_just_below_negative_boundary() {
        assert_eq!(Mood::from_polarity(-0.2001), Mood::Negative);
    }

    #[test]
    fn test_zero_is_neutral() {
        assert_eq!(Mood::from_polarity(0.0), Mood::Neutral);
    }

    #[test]
    fn test_nan_is_neutral() {
        assert_eq!(Mood::from_polarity(f64::NAN), Mood::Neutral);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mood::Negative.to_string(), "Negative");
    }
}
