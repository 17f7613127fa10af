//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! carry little meaning on their own. The default list is the English list
//! distributed with NLTK, matched case-sensitively.
//!
//! # Examples
//!
//! ```
//! use preprocessing::analysis::token_filter::Filter;
//! use preprocessing::analysis::token_filter::stop::StopFilter;
//! use preprocessing::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses default English stop words
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].text, "brown");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// English stop words as distributed with NLTK.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Default English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// Matching is exact, so `"The"` is not a stop word while `"the"` is.
/// Lowercase the text first when case should not matter.
///
/// # Examples
///
/// ```
/// use preprocessing::analysis::token_filter::Filter;
/// use preprocessing::analysis::token_filter::stop::StopFilter;
/// use preprocessing::analysis::token::Token;
///
/// let filter = StopFilter::from_words(vec!["the"]);
/// let tokens = vec![Token::new("the", 0), Token::new("quick", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "quick");
/// assert_eq!(result[0].position, 1);
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
