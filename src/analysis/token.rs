//! Token types for text analysis.
//!
//! A [`Token`] is a slice of the analysed text together with its position in
//! the token stream and its byte offsets in the source string. Tokens flow
//! from a tokenizer through token filters as a [`TokenStream`].
//!
//! # Examples
//!
//! ```
//! use preprocessing::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.char_len(), 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token without offsets.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with byte offsets into the source text.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
