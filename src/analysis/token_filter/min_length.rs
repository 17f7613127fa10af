//! Minimum length filter implementation.
//!
//! # Examples
//!
//! ```
//! use preprocessing::analysis::token_filter::Filter;
//! use preprocessing::analysis::token_filter::min_length::MinLengthFilter;
//! use preprocessing::analysis::token::Token;
//!
//! let filter = MinLengthFilter::new(3);
//! let tokens = vec![Token::new("an", 0), Token::new("owl", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "owl");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens with fewer than `min_length` characters.
///
/// Length is counted in Unicode scalar values, so `"ñú"` has length 2.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter keeping tokens of at least `min_length` characters.
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }

    /// Get the minimum token length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.char_len() >= min_length)
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
