//! Spelling correction for the preprocessing toolkit.
//!
//! Correction works in four steps: a [`Vocabulary`] of word counts built
//! once from a reference corpus, single-character [`edits`] of the query
//! word, a tiered [`CandidateSelector`] that prefers the fewest edits, and
//! a frequency [`Ranker`] that picks the winner.

pub mod candidates;
pub mod corrector;
pub mod edits;
pub mod ranker;
pub mod vocabulary;

// Re-export commonly used types
pub use candidates::{CandidateSelector, CandidateTier, Candidates};
pub use corrector::{CorrectorConfig, SpellingCorrector};
pub use ranker::{Ranker, Suggestion};
pub use vocabulary::Vocabulary;
