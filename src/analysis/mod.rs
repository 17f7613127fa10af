//! Text analysis building blocks.
//!
//! Char filters rewrite raw text, tokenizers split it into tokens and token
//! filters drop or mark tokens. The [`analyzer::PipelineAnalyzer`] chains the
//! three together. The string transforms in [`crate::text`] are built from
//! these parts.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use char_filter::CharFilter;
pub use token::{Token, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;
