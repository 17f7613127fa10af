//! Tiered candidate selection.
//!
//! Candidates are looked up in order of increasing edit distance and the
//! first tier that yields any vocabulary word wins:
//!
//! 1. the word itself, when it is already known;
//! 2. known words one edit away;
//! 3. known words two edits away;
//! 4. the word itself, unchanged, when nothing closer is known.
//!
//! A two-edit candidate is therefore never offered while a one-edit
//! candidate exists, however frequent it is.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::spelling::edits;
use crate::spelling::vocabulary::Vocabulary;

/// The tier a candidate set was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateTier {
    /// The word is in the vocabulary.
    Known,
    /// Vocabulary words one edit away.
    OneEdit,
    /// Vocabulary words two edits away.
    TwoEdit,
    /// Nothing matched; the word is returned as-is.
    Unknown,
}

impl CandidateTier {
    /// Edit distance represented by this tier, if any.
    pub fn distance(&self) -> Option<usize> {
        match self {
            CandidateTier::Known => Some(0),
            CandidateTier::OneEdit => Some(1),
            CandidateTier::TwoEdit => Some(2),
            CandidateTier::Unknown => None,
        }
    }
}

/// A non-empty, ordered set of candidate corrections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    tier: CandidateTier,
    words: BTreeSet<String>,
}

impl Candidates {
    fn single(tier: CandidateTier, word: &str) -> Self {
        Candidates {
            tier,
            words: BTreeSet::from([word.to_string()]),
        }
    }

    /// Tier that produced these candidates.
    pub fn tier(&self) -> CandidateTier {
        self.tier
    }

    /// Candidate words in lexicographic order.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// Iterate over the candidates in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Check if `word` is one of the candidates.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of candidates; always at least one.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Consume the candidates, returning the word set.
    pub fn into_words(self) -> BTreeSet<String> {
        self.words
    }
}

/// Finds correction candidates for a word against a vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSelector<'a> {
    vocabulary: &'a Vocabulary,
    max_two_edit_candidates: Option<usize>,
}

impl<'a> CandidateSelector<'a> {
    /// Create a selector with an unbounded two-edit search.
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        CandidateSelector {
            vocabulary,
            max_two_edit_candidates: None,
        }
    }

    /// Stop the two-edit search once `limit` distinct known words are found.
    ///
    /// `None` or `Some(0)` keep the search unbounded.
    pub fn with_two_edit_limit(mut self, limit: Option<usize>) -> Self {
        self.max_two_edit_candidates = limit.filter(|&limit| limit > 0);
        self
    }

    /// Find the candidates for `word`. The result is never empty.
    pub fn find_candidates(&self, word: &str) -> Candidates {
        let candidates = self.select(word);
        debug!(
            "{word:?}: {} candidate(s) at tier {:?}",
            candidates.len(),
            candidates.tier
        );
        candidates
    }

    fn select(&self, word: &str) -> Candidates {
        if self.vocabulary.contains(word) {
            return Candidates::single(CandidateTier::Known, word);
        }

        let one_edit: BTreeSet<String> = edits::one_edit(word)
            .into_iter()
            .filter(|edit| self.vocabulary.contains(edit))
            .collect();
        if !one_edit.is_empty() {
            return Candidates {
                tier: CandidateTier::OneEdit,
                words: one_edit,
            };
        }

        let two_edit = self.known_two_edits(word);
        if !two_edit.is_empty() {
            return Candidates {
                tier: CandidateTier::TwoEdit,
                words: two_edit,
            };
        }

        Candidates::single(CandidateTier::Unknown, word)
    }

    fn known_two_edits(&self, word: &str) -> BTreeSet<String> {
        let mut known = BTreeSet::new();

        for edit in edits::two_edit(word) {
            if !self.vocabulary.contains(&edit) {
                continue;
            }
            known.insert(edit);
            if let Some(limit) = self.max_two_edit_candidates
                && known.len() >= limit
            {
                break;
            }
        }

        known
    }
}
