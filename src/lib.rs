//! # preprocessing
//!
//! Text pre-processing filters and a frequency-ranked spelling corrector.
//!
//! ## Features
//!
//! - Norvig-style spelling correction over a corpus-derived vocabulary
//! - Binary vocabulary snapshots so a corpus is tokenized once
//! - String transforms for HTML entities, ligatures, numbers, URLs and punctuation
//! - Keyword extraction and sentence splitting
//! - Ordered transform pipelines
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use preprocessing::spelling::{SpellingCorrector, Vocabulary};
//! use preprocessing::text::{Pipeline, Transform};
//!
//! let vocabulary = Vocabulary::from_corpus("the quick brown fox jumps over the lazy dog");
//! let corrector = Arc::new(SpellingCorrector::new(Arc::new(vocabulary)));
//!
//! let pipeline = Pipeline::new(vec![
//!     Transform::Lowercase,
//!     Transform::RemoveUnboundPunct,
//!     Transform::CorrectSpelling,
//! ])
//! .with_corrector(corrector);
//!
//! assert_eq!(pipeline.apply("Teh QUIKC brwon fox !!").unwrap(), "the quick brown fox");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;
pub mod text;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
