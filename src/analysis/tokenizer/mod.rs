//! Tokenizer implementations for text analysis.
//!
//! - [`regex::RegexTokenizer`] - tokens are the matches of a regular expression
//! - [`whitespace::WhitespaceTokenizer`] - tokens are whitespace-separated chunks

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod whitespace;

pub use regex::RegexTokenizer;
pub use whitespace::WhitespaceTokenizer;
