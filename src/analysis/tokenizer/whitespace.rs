//! Whitespace tokenizer implementation.

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on Unicode whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Split `text` into tokens without boxing them into a stream.
    pub fn split(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start = None;

        for (offset, c) in text.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(token_start)) => {
                    tokens.push(Token::with_offsets(
                        &text[token_start..offset],
                        tokens.len(),
                        token_start,
                        offset,
                    ));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }

        if let Some(token_start) = start {
            tokens.push(Token::with_offsets(
                &text[token_start..],
                tokens.len(),
                token_start,
                text.len(),
            ));
        }

        tokens
    }

    /// Join the whitespace-separated chunks of `text` with single spaces.
    pub fn collapse(&self, text: &str) -> String {
        self.split(text)
            .into_iter()
            .map(|token| token.text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.split(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
