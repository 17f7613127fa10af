//! String transforms for cleaning raw text.
//!
//! Every transform takes `impl Into<Option<&str>>` so that both plain string
//! slices and `None` can be passed. Empty or absent input always yields an
//! empty result without any processing. Transforms that remove text also
//! collapse the remaining whitespace to single spaces.
//!
//! # Examples
//!
//! ```
//! use preprocessing::text;
//!
//! assert_eq!(text::lowercase("A TesT StriNG"), "a test string");
//! assert_eq!(text::remove_numbers("40 tests"), "tests");
//! assert_eq!(text::remove_urls(None), "");
//! ```

use std::sync::LazyLock;

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::html_entity::HtmlEntityCharFilter;
use crate::analysis::char_filter::ligature;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;
use crate::spelling::corrector::SpellingCorrector;

pub mod pipeline;
pub mod sentence;
pub mod words;

pub use pipeline::{Pipeline, Transform, preprocess_text};
pub use sentence::create_sentence_list;

static LIGATURE_FILTER: LazyLock<MappingCharFilter> = LazyLock::new(|| {
    ligature::default_filter().expect("Built-in ligature table should be valid")
});

static KEYWORD_ANALYZER: LazyLock<PipelineAnalyzer> = LazyLock::new(|| {
    PipelineAnalyzer::keyword().expect("Keyword regex pattern should be valid")
});

static ESC_CHAR_FILTER: LazyLock<PatternReplaceCharFilter> =
    LazyLock::new(|| removing(r"\\\w"));

static NUMBER_FILTER: LazyLock<PatternReplaceCharFilter> =
    LazyLock::new(|| removing(r"\b[\d./,]+"));

static NUMBER_WORD_FILTER: LazyLock<PatternReplaceCharFilter> =
    LazyLock::new(|| removing(&containing_any(words::NUMBER_WORDS)));

static TIME_WORD_FILTER: LazyLock<PatternReplaceCharFilter> =
    LazyLock::new(|| removing(&containing_any(words::TIME_WORDS)));

static UNBOUND_PUNCT_FILTER: LazyLock<PatternReplaceCharFilter> = LazyLock::new(|| {
    let class: String = words::PUNCTUATION
        .chars()
        .map(|c| format!(r"\x{:02X}", c as u32))
        .collect();
    removing(&format!(r"[{class}][{class}]+|\B[{class}]+"))
});

static URL_FILTER: LazyLock<PatternReplaceCharFilter> = LazyLock::new(|| removing(r"http\S+"));

fn removing(pattern: &str) -> PatternReplaceCharFilter {
    PatternReplaceCharFilter::removing(pattern).expect("Built-in regex pattern should be valid")
}

/// Pattern matching any whitespace-delimited chunk in which one of `words`
/// starts at a word boundary.
fn containing_any(words: &[&str]) -> String {
    format!(r"\S*\b(?:{})\S*", words.join("|"))
}

fn non_empty<'t>(text: impl Into<Option<&'t str>>) -> Option<&'t str> {
    text.into().filter(|text| !text.is_empty())
}

/// Remove every match of `filter` and collapse the remaining whitespace.
fn remove_with<'t>(filter: &PatternReplaceCharFilter, text: impl Into<Option<&'t str>>) -> String {
    match non_empty(text) {
        Some(text) => WhitespaceTokenizer::new().collapse(&filter.filter(text)),
        None => String::new(),
    }
}

/// Decode HTML character references.
///
/// A literal `&quot;` left over after decoding (as produced by
/// `&amp;quot;`) is replaced by a single quote.
pub fn convert_html_entities<'t>(text: impl Into<Option<&'t str>>) -> String {
    match non_empty(text) {
        Some(text) => HtmlEntityCharFilter::new()
            .filter(text)
            .replace("&quot;", "'"),
        None => String::new(),
    }
}

/// Expand typographic ligatures (`æ`, `ﬁ`, ...) into their letters.
pub fn convert_ligatures<'t>(text: impl Into<Option<&'t str>>) -> String {
    convert_ligatures_with(text, &LIGATURE_FILTER)
}

/// Expand ligatures using a custom table, see [`ligature::load_filter`].
pub fn convert_ligatures_with<'t>(
    text: impl Into<Option<&'t str>>,
    ligatures: &MappingCharFilter,
) -> String {
    match non_empty(text) {
        Some(text) => ligatures.filter(text),
        None => String::new(),
    }
}

/// Correct the spelling of each whitespace-separated word.
pub fn correct_spelling<'t>(
    text: impl Into<Option<&'t str>>,
    corrector: &SpellingCorrector,
) -> String {
    corrector.correct_text(non_empty(text))
}

/// Keep only keywords: tokens that are not NLTK English stop words and
/// have at least three characters, joined by single spaces.
///
/// Stop words are matched case-sensitively, so lowercase first if
/// capitalised stop words should go too.
pub fn keyword_tokenize<'t>(text: impl Into<Option<&'t str>>) -> Result<String> {
    match non_empty(text) {
        Some(text) => KEYWORD_ANALYZER.analyze_to_string(text),
        None => Ok(String::new()),
    }
}

/// Convert to lowercase.
pub fn lowercase<'t>(text: impl Into<Option<&'t str>>) -> String {
    non_empty(text).map(str::to_lowercase).unwrap_or_default()
}

/// Remove literal escape sequences such as `\n` written as a backslash
/// followed by a word character.
pub fn remove_esc_chars<'t>(text: impl Into<Option<&'t str>>) -> String {
    remove_with(&ESC_CHAR_FILTER, text)
}

/// Remove integer and decimal numbers (`40`, `10.0`, `1,000`, `3/4`).
pub fn remove_numbers<'t>(text: impl Into<Option<&'t str>>) -> String {
    remove_with(&NUMBER_FILTER, text)
}

/// Remove chunks containing a number word (`one`, `twenty`, ...).
pub fn remove_number_words<'t>(text: impl Into<Option<&'t str>>) -> String {
    remove_with(&NUMBER_WORD_FILTER, text)
}

/// Remove chunks containing a time word (`day`, `hour`, `monday`, ...).
pub fn remove_time_words<'t>(text: impl Into<Option<&'t str>>) -> String {
    remove_with(&TIME_WORD_FILTER, text)
}

/// Remove punctuation runs and punctuation not attached to a word.
///
/// `"hello."` keeps its period, while `" . "` and `";."` are removed.
pub fn remove_unbound_punct<'t>(text: impl Into<Option<&'t str>>) -> String {
    remove_with(&UNBOUND_PUNCT_FILTER, text)
}

/// Remove URLs starting with `http`.
pub fn remove_urls<'t>(text: impl Into<Option<&'t str>>) -> String {
    remove_with(&URL_FILTER, text)
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn remove_whitespace<'t>(text: impl Into<Option<&'t str>>) -> String {
    match non_empty(text) {
        Some(text) => WhitespaceTokenizer::new().collapse(text),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::spelling::vocabulary::Vocabulary;

    #[test]
    fn test_empty_and_absent_input() {
        let string_transforms: &[fn(Option<&str>) -> String] = &[
            |t| convert_html_entities(t),
            |t| convert_ligatures(t),
            |t| lowercase(t),
            |t| remove_esc_chars(t),
            |t| remove_numbers(t),
            |t| remove_number_words(t),
            |t| remove_time_words(t),
            |t| remove_unbound_punct(t),
            |t| remove_urls(t),
            |t| remove_whitespace(t),
        ];
        for transform in string_transforms {
            assert_eq!(transform(None), "");
            assert_eq!(transform(Some("")), "");
        }
        assert_eq!(keyword_tokenize(None).unwrap(), "");
        assert_eq!(keyword_tokenize("").unwrap(), "");
    }

    #[test]
    fn test_convert_html_entities() {
        assert_eq!(convert_html_entities("&amp;"), "&");
        assert_eq!(convert_html_entities("&quot;"), "\"");
        assert_eq!(convert_html_entities("say &amp;quot;hi&amp;quot;"), "say 'hi'");
        assert_eq!(convert_html_entities("&lt;p&gt; caf&#233;"), "<p> café");
    }

    #[test]
    fn test_convert_ligatures() {
        assert_eq!(convert_ligatures("encyclopædia ﬁle"), "encyclopaedia file");
        let custom = MappingCharFilter::new(vec![("æ", "e")]).unwrap();
        assert_eq!(convert_ligatures_with("encyclopædia ﬁle", &custom), "encyclopedia ﬁle");
    }

    #[test]
    fn test_correct_spelling() {
        let vocabulary = Vocabulary::from_corpus("the test string is the best test");
        let corrector = SpellingCorrector::new(Arc::new(vocabulary));
        assert_eq!(correct_spelling("hte tset strnig", &corrector), "the test string");
        assert_eq!(correct_spelling(None, &corrector), "");
    }

    #[test]
    fn test_keyword_tokenize() {
        assert_eq!(keyword_tokenize("a test string").unwrap(), "test string");
        assert_eq!(
            keyword_tokenize("The results of the 2.5 km run (unofficial).").unwrap(),
            "The results 2.5 run unofficial"
        );
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(lowercase("A TesT StriNG"), "a test string");
        assert_eq!(lowercase("ÉCOLE"), "école");
    }

    #[test]
    fn test_remove_esc_chars() {
        assert_eq!(remove_esc_chars("a\ntest\nstring"), "a test string");
        assert_eq!(remove_esc_chars(r"a \ttest \nstring"), "a test string");
        assert_eq!(remove_esc_chars(r"tab\tbed"), "tabbed");
    }

    #[test]
    fn test_remove_numbers() {
        assert_eq!(remove_numbers("40 tests"), "tests");
        assert_eq!(remove_numbers("pay 1,000.50 or 3/4 now"), "pay or now");
        assert_eq!(remove_numbers("mp3 player"), "mp3 player");
    }

    #[test]
    fn test_remove_number_words() {
        assert_eq!(
            remove_number_words("one year i did two hour tests"),
            "year i did hour tests"
        );
        assert_eq!(remove_number_words("someone twenty-one"), "someone");
    }

    #[test]
    fn test_remove_time_words() {
        assert_eq!(
            remove_time_words("one year i did two hour tests"),
            "one i did two tests"
        );
        assert_eq!(remove_time_words("every days, (monday)"), "every");
    }

    #[test]
    fn test_remove_unbound_punct() {
        assert_eq!(remove_unbound_punct("'./'' a . test . string"), "a test string");
        assert_eq!(remove_unbound_punct("hello. world!"), "hello. world!");
        assert_eq!(remove_unbound_punct("wait ;. what"), "wait what");
    }

    #[test]
    fn test_remove_urls() {
        assert_eq!(remove_urls("http://example.com"), "");
        assert_eq!(
            remove_urls("see https://example.com/a?b=c for  details"),
            "see for details"
        );
    }

    #[test]
    fn test_remove_whitespace() {
        assert_eq!(remove_whitespace(" a\n\ttest   string "), "a test string");
    }
}
