//! Token filter implementations for token transformation.
//!
//! - [`stop::StopFilter`] - Removes stop words
//! - [`min_length::MinLengthFilter`] - Removes tokens shorter than a minimum length

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod min_length;
pub mod stop;

pub use min_length::MinLengthFilter;
pub use stop::StopFilter;
