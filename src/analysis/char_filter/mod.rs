//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text string before it is tokenized.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`mapping::MappingCharFilter`] - Literal string mapping replacement
//! - [`html_entity::HtmlEntityCharFilter`] - HTML character reference decoding
//!
//! The [`ligature`] module builds a [`mapping::MappingCharFilter`] that
//! expands typographic ligatures.
//!
//! # Examples
//!
//! ```
//! use preprocessing::analysis::char_filter::CharFilter;
//! use preprocessing::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"http\S+", "").unwrap();
//! assert_eq!(filter.filter("see http://example.com now"), "see  now");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod html_entity;
pub mod ligature;
pub mod mapping;
pub mod pattern_replace;

pub use html_entity::HtmlEntityCharFilter;
pub use mapping::MappingCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
