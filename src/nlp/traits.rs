// Language model and polarity scorer traits — the swap-ready seams.
//
// The review pipeline only talks to these two traits. The default
// implementations are the lexical model and the lexicon scorer; the ONNX
// sentence embedder plugs in behind LanguageModel, and tests plug in fakes.

use anyhow::Result;

use super::document::Document;

/// Polarity and subjectivity of a document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    /// -1.0 (unfavorable) to 1.0 (favorable)
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective)
    pub subjectivity: f64,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "polarity={:.2}, subjectivity={:.2}",
            self.polarity, self.subjectivity
        )
    }
}

/// Turns text into a [`Document`]: tokens with stop-word flags plus a
/// vector for similarity.
pub trait LanguageModel {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Parse text into a document.
    fn parse(&self, text: &str) -> Result<Document>;
}

/// Scores the sentiment of a parsed document.
pub trait PolarityScorer {
    fn score(&self, doc: &Document) -> Result<Sentiment>;
}
