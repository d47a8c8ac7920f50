// English stop-word set used by the tokenizer.
//
// The word list comes from the `stop-words` crate. Some general-purpose
// lists include evaluative words ("good", "best", "great"), so callers can
// exempt words that carry polarity in the active sentiment lexicon.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// A lowercase stop-word lookup set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The English list from the `stop-words` crate.
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_words(words)
    }

    /// The English list minus any word in `keep`.
    pub fn english_except<'a, I>(keep: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::english();
        for word in keep {
            set.words.remove(word);
        }
        set
    }

    /// Build a set from an explicit word list (lowercased).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_stop(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
