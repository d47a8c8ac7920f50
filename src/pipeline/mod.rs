// Review processing — the orchestrator.
//
// ReviewAnalyzer carries the language model and polarity scorer as an
// explicit context. `process` returns a typed outcome; `process_and_report`
// prints it and swallows failures, for interactive use.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::analysis::sentiment::{analyze_sentiment, SentimentResult};
use crate::analysis::similarity::{analyze_similarity, SimilarityResult};
use crate::config::{Config, SimilarityBackend};
use crate::dataset::ReviewDataset;
use crate::error::ReviewError;
use crate::nlp::document::Document;
use crate::nlp::download::embedding_model_dir;
use crate::nlp::lexical::LexicalModel;
use crate::nlp::lexicon::{Lexicon, LexiconScorer};
use crate::nlp::onnx::OnnxModel;
use crate::nlp::traits::{LanguageModel, PolarityScorer};
use crate::output::terminal;
use crate::text::clean::clean_text;
use crate::text::stopwords::StopWords;

/// Sentiment of one identified review.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewSentiment {
    pub id: usize,
    pub result: SentimentResult,
}

/// Successful outcome of processing one or two reviews.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewReport {
    Single(ReviewSentiment),
    Pair {
        similarity: SimilarityResult,
        first: ReviewSentiment,
        second: ReviewSentiment,
    },
}

/// Outcome of one review in a batch run.
pub type BatchOutcome = (usize, Result<SentimentResult, ReviewError>);

pub struct ReviewAnalyzer {
    model: Box<dyn LanguageModel>,
    scorer: Box<dyn PolarityScorer>,
}

impl ReviewAnalyzer {
    pub fn new(model: Box<dyn LanguageModel>, scorer: Box<dyn PolarityScorer>) -> Self {
        Self { model, scorer }
    }

    /// Lexical model plus lexicon scorer. Words the lexicon reacts to are
    /// kept out of the stop list.
    pub fn lexical(lexicon: Lexicon) -> Self {
        let stop_words = StopWords::english_except(lexicon.vocabulary());
        Self::new(
            Box::new(LexicalModel::new(stop_words)),
            Box::new(LexiconScorer::new(lexicon)),
        )
    }

    /// Build the context the config asks for: custom lexicon if set, and
    /// the lexical or ONNX similarity backend.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut lexicon = Lexicon::builtin();
        if let Some(path) = &config.lexicon_path {
            lexicon.extend_from_file(path)?;
        }

        let analyzer = match config.similarity_backend {
            SimilarityBackend::Lexical => Self::lexical(lexicon),
            SimilarityBackend::Onnx => {
                let stop_words = StopWords::english_except(lexicon.vocabulary());
                let model_dir = embedding_model_dir(&config.model_dir);
                let model = OnnxModel::load(&model_dir, stop_words)?;
                Self::new(Box::new(model), Box::new(LexiconScorer::new(lexicon)))
            }
        };

        info!(backend = analyzer.model_name(), "Review analyzer ready");
        Ok(analyzer)
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Clean raw text, drop stop-words, and reparse the remainder.
    ///
    /// Two model invocations: one to find the stop-words, one on the
    /// filtered text. Fails with `EmptyText` when cleaning leaves nothing.
    pub fn clean_and_tokenize(&self, id: usize, raw: &str) -> Result<Document, ReviewError> {
        let cleaned = clean_text(raw);
        if cleaned.split_whitespace().next().is_none() {
            return Err(ReviewError::EmptyText(id));
        }

        let parsed = self.model.parse(&cleaned)?;
        let filtered = parsed.content_words().collect::<Vec<_>>().join(" ");
        let doc = self.model.parse(&filtered)?;

        debug!(
            id,
            tokens = parsed.tokens().len(),
            kept = doc.tokens().len(),
            "Tokenized review"
        );
        Ok(doc)
    }

    fn sentiment(&self, id: usize, doc: &Document) -> Result<ReviewSentiment, ReviewError> {
        let result = analyze_sentiment(doc, self.scorer.as_ref())?;
        debug!(
            id,
            polarity = result.sentiment.polarity,
            mood = %result.mood,
            "Scored review"
        );
        Ok(ReviewSentiment { id, result })
    }

    /// Analyze one review, or compare two.
    ///
    /// With a second identifier: similarity first, then each review's
    /// sentiment. Any failure comes back as a typed `ReviewError`.
    pub fn process(
        &self,
        dataset: &ReviewDataset,
        field: &str,
        id: usize,
        other: Option<usize>,
    ) -> Result<ReviewReport, ReviewError> {
        match other {
            Some(other_id) => {
                let doc_a = self.clean_and_tokenize(id, dataset.field(id, field)?)?;
                let doc_b = self.clean_and_tokenize(other_id, dataset.field(other_id, field)?)?;

                let similarity = analyze_similarity(&doc_a, &doc_b)?;
                let first = self.sentiment(id, &doc_a)?;
                let second = self.sentiment(other_id, &doc_b)?;

                Ok(ReviewReport::Pair {
                    similarity,
                    first,
                    second,
                })
            }
            None => {
                let doc = self.clean_and_tokenize(id, dataset.field(id, field)?)?;
                Ok(ReviewReport::Single(self.sentiment(id, &doc)?))
            }
        }
    }

    /// Like `process`, but prints the result block. On failure prints the
    /// generic parameter-check message and the error, and returns `None`.
    pub fn process_and_report(
        &self,
        dataset: &ReviewDataset,
        field: &str,
        id: usize,
        other: Option<usize>,
    ) -> Option<ReviewReport> {
        match self.process(dataset, field, id, other) {
            Ok(report) => {
                terminal::display_report(&report);
                Some(report)
            }
            Err(err) => {
                warn!(id, other = ?other, error = %err, "Review processing failed");
                terminal::display_failure(&err);
                None
            }
        }
    }

    /// Score every review in the dataset, in identifier order. A failing
    /// review is recorded and the run continues.
    pub fn analyze_all(&self, dataset: &ReviewDataset, field: &str) -> Vec<BatchOutcome> {
        dataset
            .ids()
            .map(|id| {
                let outcome = dataset
                    .field(id, field)
                    .and_then(|text| self.clean_and_tokenize(id, text))
                    .and_then(|doc| self.sentiment(id, &doc))
                    .map(|s| s.result);
                (id, outcome)
            })
            .collect()
    }
}
