//! Word and text spelling correction.
//!
//! [`SpellingCorrector`] ties the pieces together: it normalises the query
//! word, asks the [`CandidateSelector`] for the closest known words and lets
//! the [`Ranker`] pick the most frequent one.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use preprocessing::spelling::corrector::SpellingCorrector;
//! use preprocessing::spelling::vocabulary::Vocabulary;
//!
//! let vocabulary = Vocabulary::from_corpus("the terms of the test were the terms we set");
//! let corrector = SpellingCorrector::new(Arc::new(vocabulary));
//!
//! assert_eq!(corrector.correct_word("terts"), "terms");
//! assert_eq!(corrector.correct_word("hte"), "the");
//! assert_eq!(corrector.correct_word(None), "");
//! assert_eq!(corrector.correct_text("hte terts"), "the terms");
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::spelling::candidates::{CandidateSelector, CandidateTier, Candidates};
use crate::spelling::ranker::{Ranker, Suggestion};
use crate::spelling::vocabulary::Vocabulary;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Lowercase query words before looking them up. The vocabulary only
    /// holds lowercase words, so disabling this leaves capitalised words
    /// to be corrected by edits alone.
    pub lowercase_input: bool,
    /// Maximum number of suggestions returned by `suggest`.
    pub max_suggestions: usize,
    /// Stop the two-edit search after this many known words (unbounded when unset).
    pub max_two_edit_candidates: Option<usize>,
    /// Words longer than this many characters are returned unchanged (0 disables the check).
    pub max_word_length: usize,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            lowercase_input: true,
            max_suggestions: 5,
            max_two_edit_candidates: None,
            max_word_length: 0,
        }
    }
}

/// Frequency-ranked spelling corrector over a shared vocabulary.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    vocabulary: Arc<Vocabulary>,
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a corrector with the default configuration.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self::with_config(vocabulary, CorrectorConfig::default())
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(vocabulary: Arc<Vocabulary>, config: CorrectorConfig) -> Self {
        SpellingCorrector { vocabulary, config }
    }

    /// The vocabulary used for lookups.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// The active configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Return the most likely spelling of `word`.
    ///
    /// Empty or absent input yields an empty string without any lookup.
    /// Known words are returned in normalised form, and words with no known word
    /// within two edits are returned unchanged.
    pub fn correct_word<'w>(&self, word: impl Into<Option<&'w str>>) -> String {
        let Some(word) = word.into().filter(|word| !word.is_empty()) else {
            return String::new();
        };
        if self.exceeds_length_limit(word) {
            return word.to_string();
        }

        let candidates = self.find_candidates(word);
        if candidates.tier() == CandidateTier::Unknown {
            return word.to_string();
        }

        Ranker::new(&self.vocabulary).best(&candidates)
    }

    /// Find the candidate corrections for `word`.
    pub fn find_candidates(&self, word: &str) -> Candidates {
        let query = self.normalize(word);
        CandidateSelector::new(&self.vocabulary)
            .with_two_edit_limit(self.config.max_two_edit_candidates)
            .find_candidates(&query)
    }

    /// Ranked suggestions for `word`, best first.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        if word.is_empty() || self.exceeds_length_limit(word) {
            return Vec::new();
        }

        let candidates = self.find_candidates(word);
        if candidates.tier() == CandidateTier::Unknown {
            return Vec::new();
        }

        Ranker::new(&self.vocabulary).rank(&candidates, self.config.max_suggestions)
    }

    /// Check if `word` is in the vocabulary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.vocabulary.contains(&self.normalize(word))
    }

    /// Correct every whitespace-separated word of `text` and rejoin them
    /// with single spaces.
    pub fn correct_text<'t>(&self, text: impl Into<Option<&'t str>>) -> String {
        let Some(text) = text.into() else {
            return String::new();
        };

        text.split_whitespace()
            .map(|word| self.correct_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Correct independent words in parallel, preserving their order.
    pub fn correct_batch<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        words
            .par_iter()
            .map(|word| self.correct_word(word.as_ref()))
            .collect()
    }

    fn normalize(&self, word: &str) -> String {
        if self.config.lowercase_input {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }

    fn exceeds_length_limit(&self, word: &str) -> bool {
        self.config.max_word_length > 0 && word.chars().count() > self.config.max_word_length
    }
}
