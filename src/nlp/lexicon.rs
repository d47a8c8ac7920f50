// Pattern-style sentiment lexicon and scorer.
//
// Each polar word carries a polarity (-1.0 to 1.0) and a subjectivity
// (0.0 to 1.0). Intensifiers ("very", "really") scale the next polar word;
// negations ("not", "never") flip it at half strength. A document's
// sentiment is the mean over the polar words it contains.
//
// The built-in table is tuned for product reviews. A JSON file can extend
// or override it (see `Lexicon::extend_from_file`).

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::document::Document;
use super::traits::{PolarityScorer, Sentiment};

/// Multiplier applied to a polar word preceded by a negation.
const NEGATION_FACTOR: f64 = -0.5;

/// Negation words, as they look after cleaning ("don't" -> "dont").
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nt", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "werent",
    "cant", "cannot", "couldnt", "wont", "wouldnt", "shouldnt", "hardly", "neither", "nor",
];

/// Built-in polar words: (word, polarity, subjectivity).
const POLAR_WORDS: &[(&str, f64, f64)] = &[
    // Positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("comfortable", 0.4, 0.7),
    ("convenient", 0.4, 0.6),
    ("cool", 0.35, 0.65),
    ("cute", 0.5, 1.0),
    ("delighted", 0.7, 0.8),
    ("durable", 0.4, 0.5),
    ("easy", 0.43, 0.83),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("favorite", 0.5, 1.0),
    ("fine", 0.42, 0.5),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.5),
    ("ideal", 0.9, 0.9),
    ("impressed", 0.7, 0.8),
    ("incredible", 0.9, 0.9),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("loves", 0.5, 0.6),
    ("lovely", 0.5, 0.75),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("perfectly", 1.0, 1.0),
    ("pleased", 0.5, 1.0),
    ("quality", 0.3, 0.4),
    ("recommend", 0.5, 0.5),
    ("recommended", 0.5, 0.5),
    ("reliable", 0.5, 0.6),
    ("satisfied", 0.5, 1.0),
    ("smooth", 0.4, 0.7),
    ("solid", 0.3, 0.4),
    ("sturdy", 0.4, 0.5),
    ("super", 0.33, 0.67),
    ("superb", 1.0, 1.0),
    ("useful", 0.3, 0.1),
    ("well", 0.2, 0.3),
    ("wonderful", 1.0, 1.0),
    ("works", 0.2, 0.3),
    ("worth", 0.3, 0.1),
    // Negative
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broke", -0.4, 0.4),
    ("broken", -0.4, 0.4),
    ("cheap", -0.3, 0.7),
    ("complaint", -0.4, 0.5),
    ("confusing", -0.4, 0.7),
    ("crap", -0.8, 0.8),
    ("defective", -0.5, 0.5),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("dislike", -0.5, 0.6),
    ("flimsy", -0.4, 0.6),
    ("frustrating", -0.4, 0.8),
    ("garbage", -0.8, 0.8),
    ("hate", -0.8, 0.9),
    ("hated", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("junk", -0.7, 0.7),
    ("mediocre", -0.3, 0.6),
    ("poor", -0.4, 0.6),
    ("poorly", -0.4, 0.6),
    ("problem", -0.3, 0.4),
    ("refund", -0.3, 0.3),
    ("returned", -0.3, 0.3),
    ("sad", -0.5, 1.0),
    ("slow", -0.3, 0.39),
    ("stopped", -0.3, 0.3),
    ("terrible", -1.0, 1.0),
    ("unhappy", -0.6, 0.9),
    ("unreliable", -0.5, 0.6),
    ("useless", -0.5, 0.2),
    ("waste", -0.6, 0.5),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Built-in intensifiers: (word, multiplier).
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("barely", 0.5),
    ("especially", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.3),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("so", 1.3),
    ("too", 1.2),
    ("totally", 1.4),
    ("truly", 1.3),
    ("very", 1.3),
];

/// A polar word's scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// One row of a custom lexicon file. Rows with `intensity` are intensifiers;
/// the rest are polar words.
#[derive(Debug, Deserialize)]
struct LexiconFileEntry {
    word: String,
    #[serde(default)]
    polarity: f64,
    #[serde(default)]
    subjectivity: f64,
    intensity: Option<f64>,
}

/// Polar words plus intensifiers.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    intensifiers: HashMap<String, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The built-in review lexicon.
    pub fn builtin() -> Self {
        let entries = POLAR_WORDS
            .iter()
            .map(|&(word, polarity, subjectivity)| {
                (
                    word.to_string(),
                    LexiconEntry {
                        polarity,
                        subjectivity,
                    },
                )
            })
            .collect();
        let intensifiers = INTENSIFIERS
            .iter()
            .map(|&(word, mult)| (word.to_string(), mult))
            .collect();
        Self {
            entries,
            intensifiers,
        }
    }

    /// An empty lexicon (scores everything 0.0).
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            intensifiers: HashMap::new(),
        }
    }

    pub fn insert(&mut self, word: &str, polarity: f64, subjectivity: f64) {
        self.entries.insert(
            word.to_lowercase(),
            LexiconEntry {
                polarity: polarity.clamp(-1.0, 1.0),
                subjectivity: subjectivity.clamp(0.0, 1.0),
            },
        );
    }

    pub fn insert_intensifier(&mut self, word: &str, multiplier: f64) {
        self.intensifiers.insert(word.to_lowercase(), multiplier);
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every word the scorer reacts to: polar words, intensifiers and
    /// negations. The tokenizer keeps these out of the stop list.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .chain(self.intensifiers.keys())
            .map(String::as_str)
            .chain(NEGATIONS.iter().copied())
    }

    /// Merge entries from a JSON array of
    /// `{"word", "polarity", "subjectivity", "intensity"?}` objects.
    /// Existing words are overridden.
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize> {
        let rows: Vec<LexiconFileEntry> =
            serde_json::from_str(json).context("Invalid lexicon JSON")?;
        let count = rows.len();
        for row in rows {
            match row.intensity {
                Some(mult) => self.insert_intensifier(&row.word, mult),
                None => self.insert(&row.word, row.polarity, row.subjectivity),
            }
        }
        Ok(count)
    }

    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let count = self
            .extend_from_json(&json)
            .with_context(|| format!("Failed to load lexicon from {}", path.display()))?;
        debug!(path = %path.display(), entries = count, "Loaded custom lexicon");
        Ok(count)
    }
}

/// Lexicon-based polarity scorer — the default for review sentiment.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    lexicon: Lexicon,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score a sequence of lowercase words.
    pub fn score_words<'a, I>(&self, words: I) -> Sentiment
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        let mut multiplier = 1.0;
        let mut negated = false;

        for word in words {
            if NEGATIONS.contains(&word) {
                negated = true;
                continue;
            }
            if let Some(mult) = self.lexicon.intensity(word) {
                multiplier *= mult;
                continue;
            }
            if let Some(entry) = self.lexicon.get(word) {
                let mut polarity = entry.polarity * multiplier;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                polarities.push(polarity.clamp(-1.0, 1.0));
                subjectivities.push((entry.subjectivity * multiplier).clamp(0.0, 1.0));
            }
            // Modifiers only reach the word right after them.
            multiplier = 1.0;
            negated = false;
        }

        if polarities.is_empty() {
            return Sentiment::default();
        }

        let n = polarities.len() as f64;
        Sentiment {
            polarity: (polarities.iter().sum::<f64>() / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivities.iter().sum::<f64>() / n).clamp(0.0, 1.0),
        }
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, doc: &Document) -> Result<Sentiment> {
        let lowered: Vec<String> = doc.tokens().iter().map(|t| t.text.to_lowercase()).collect();
        Ok(self.score_words(lowered.iter().map(String::as_str)))
    }
}
