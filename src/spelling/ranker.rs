//! Frequency-based ranking of candidate corrections.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::spelling::candidates::{CandidateTier, Candidates};
use crate::spelling::vocabulary::Vocabulary;

/// A ranked spelling suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Relative frequency of the word in the vocabulary.
    pub probability: f64,
    /// Occurrence count of the word in the vocabulary.
    pub frequency: u64,
    /// Tier the suggestion was found in.
    pub tier: CandidateTier,
}

/// Orders candidates by descending probability, ties by ascending word.
pub struct Ranker<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> Ranker<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Ranker { vocabulary }
    }

    /// Select the most probable candidate.
    ///
    /// Among equally frequent candidates the lexicographically smallest
    /// wins, so the result does not depend on hash iteration order.
    pub fn best(&self, candidates: &Candidates) -> String {
        let mut best: Option<(&str, u64)> = None;

        // Candidates iterate in ascending order, so a strict comparison keeps
        // the smallest word among equal frequencies.
        for word in candidates.iter() {
            let frequency = self.vocabulary.frequency(word);
            match best {
                Some((_, best_frequency)) if frequency <= best_frequency => {}
                _ => best = Some((word, frequency)),
            }
        }

        best.map(|(word, _)| word.to_string()).unwrap_or_default()
    }

    /// Rank all candidates, best first, keeping at most `limit`.
    pub fn rank(&self, candidates: &Candidates, limit: usize) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = candidates
            .iter()
            .map(|word| Suggestion {
                word: word.to_string(),
                probability: self.vocabulary.probability(word),
                frequency: self.vocabulary.frequency(word),
                tier: candidates.tier(),
            })
            .collect();

        suggestions.sort_by(compare);
        suggestions.truncate(limit);
        suggestions
    }
}

fn compare(a: &Suggestion, b: &Suggestion) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| a.word.cmp(&b.word))
}
