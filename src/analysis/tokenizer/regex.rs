//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{PreprocessingError, Result};

/// Word runs that may carry inner `.`, `/`, `,` or `-` (`10.0`, `e-mail`,
/// `and/or`), or a single bracket or separator on its own.
pub const KEYWORD_PATTERN: &str = r"\b[\w./,-]+\b|[-.,/()]";

/// A tokenizer whose tokens are the non-overlapping matches of a regex.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    ///
    /// The default pattern `r"\w+"` matches sequences of word characters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a tokenizer for keyword extraction using [`KEYWORD_PATTERN`].
    pub fn keyword() -> Result<Self> {
        Self::with_pattern(KEYWORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| PreprocessingError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &RegexTokenizer, text: &str) -> Vec<String> {
        tokenizer
            .tokenize(text)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_keyword_tokenizer() {
        let tokenizer = RegexTokenizer::keyword().unwrap();
        assert_eq!(
            texts(&tokenizer, "costs 10.0 (approx) for e-mail, and/or fax."),
            vec![
                "costs", "10.0", "(", "approx", ")", "for", "e-mail", ",", "and/or", "fax", "."
            ]
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexTokenizer::with_pattern("[unclosed").unwrap_err();
        assert!(matches!(err, PreprocessingError::Analysis(_)));
    }

    #[test]
    fn test_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
