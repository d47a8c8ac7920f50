// Mood tallies across a batch of analyzed reviews.

use super::sentiment::{Mood, SentimentResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub failed: usize,
    polarity_sum: f64,
}

impl MoodSummary {
    /// Tally a sequence of per-review outcomes.
    pub fn from_outcomes<'a, I, E>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a Result<SentimentResult, E>>,
        E: 'a,
    {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome {
                Ok(result) => summary.record(result),
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }

    pub fn record(&mut self, result: &SentimentResult) {
        match result.mood {
            Mood::Positive => self.positive += 1,
            Mood::Negative => self.negative += 1,
            Mood::Neutral => self.neutral += 1,
        }
        self.polarity_sum += result.sentiment.polarity;
    }

    /// Reviews that produced a sentiment.
    pub fn scored(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn total(&self) -> usize {
        self.scored() + self.failed
    }

    /// Mean polarity over scored reviews, or 0.0 when none were scored.
    pub fn mean_polarity(&self) -> f64 {
        match self.scored() {
            0 => 0.0,
            n => self.polarity_sum / n as f64,
        }
    }

    /// Share of scored reviews in a bucket, 0.0 to 1.0.
    pub fn share(&self, mood: Mood) -> f64 {
        let count = match mood {
            Mood::Positive => self.positive,
            Mood::Negative => self.negative,
            Mood::Neutral => self.neutral,
        };
        match self.scored() {
            0 => 0.0,
            n => count as f64 / n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::traits::Sentiment;

    fn result(polarity: f64) -> Result<SentimentResult, String> {
        Ok(SentimentResult {
            sentiment: Sentiment {
                polarity,
                subjectivity: 0.5,
            },
            mood: Mood::from_polarity(polarity),
        })
    }

    #[test]
    fn test_counts_and_mean() {
        let outcomes = vec![
            result(0.9),
            result(-0.5),
            result(0.0),
            Err("boom".to_string()),
        ];
        let summary = MoodSummary::from_outcomes(&outcomes);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 4);
        assert!((summary.mean_polarity() - (0.4 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let outcomes: Vec<Result<SentimentResult, String>> = Vec::new();
        let summary = MoodSummary::from_outcomes(&outcomes);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.mean_polarity(), 0.0);
        assert_eq!(summary.share(Mood::Positive), 0.0);
    }

    #[test]
    fn test_share() {
        let outcomes = vec![result(0.9), result(0.8), result(0.0), result(-0.9)];
        let summary = MoodSummary::from_outcomes(&outcomes);
        assert!((summary.share(Mood::Positive) - 0.5).abs() < 1e-9);
    }
}
