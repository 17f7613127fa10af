//! Pipeline analyzer that combines char filters, a tokenizer and token filters.
//!
//! The [`PipelineAnalyzer`] applies processing in this order:
//! 1. Char filters: rewrite the raw text
//! 2. Tokenizer: splits text into tokens
//! 3. Token filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use preprocessing::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use preprocessing::analysis::token_filter::stop::StopFilter;
//! use preprocessing::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new().unwrap()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));
//!
//! let tokens: Vec<_> = analyzer.analyze("hello the world and test").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[2].text, "test");
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::min_length::MinLengthFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Trait for analyzers that turn text into a token stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// The keyword analyzer: keyword tokens, minus NLTK English stop words,
    /// minus tokens shorter than three characters.
    pub fn keyword() -> Result<Self> {
        Ok(PipelineAnalyzer::new(Arc::new(RegexTokenizer::keyword()?))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(MinLengthFilter::new(3))))
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this analyzer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Analyze `text` and join the surviving token texts with single spaces.
    pub fn analyze_to_string(&self, text: &str) -> Result<String> {
        Ok(self
            .analyze(text)?
            .map(|token| token.text)
            .collect::<Vec<_>>()
            .join(" "))
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    #[test]
    fn test_pipeline_order() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::removing(r"\d+").unwrap()))
            .add_filter(Arc::new(MinLengthFilter::new(2)));

        assert_eq!(
            analyzer.analyze_to_string("a 12 bc d3e 4").unwrap(),
            "bc de"
        );
        assert_eq!(analyzer.char_filters().len(), 1);
        assert_eq!(analyzer.filters().len(), 1);
        assert_eq!(analyzer.tokenizer().name(), "whitespace");
    }

    #[test]
    fn test_keyword_analyzer() {
        let analyzer = PipelineAnalyzer::keyword().unwrap();
        assert_eq!(analyzer.analyze_to_string("a test string").unwrap(), "test string");
        assert_eq!(
            analyzer
                .analyze_to_string("The cost of the e-mail was 10.0 (ten) dollars.")
                .unwrap(),
            "The cost e-mail 10.0 ten dollars"
        );
    }

    #[test]
    fn test_empty_text() {
        let analyzer = PipelineAnalyzer::keyword().unwrap();
        assert_eq!(analyzer.analyze("").unwrap().count(), 0);
    }
}
