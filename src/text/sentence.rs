//! Sentence splitting.
//!
//! Text is split after a run of `.`, `!` or `?` (optionally followed by
//! closing quotes or brackets) that is followed by whitespace. A single
//! period does not end a sentence when it closes a known abbreviation
//! (`Dr.`), a single initial (`J.`) or a dotted abbreviation (`e.g.`).
//! Periods inside a chunk, as in `10.0` or `example.com`, never split.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::text::words::ABBREVIATIONS;

static ABBREVIATION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ABBREVIATIONS.iter().copied().collect());

const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '’', '”', '»'];
const OPENERS: &[char] = &['"', '\'', '(', '[', '{', '‘', '“', '«'];

/// Split `text` into trimmed sentences.
///
/// Empty or absent input yields an empty list.
///
/// # Examples
///
/// ```
/// use preprocessing::text::create_sentence_list;
///
/// let sentences = create_sentence_list("Dr. Smith arrived. Was it 10.5 hours? Yes!");
/// assert_eq!(sentences, vec!["Dr. Smith arrived.", "Was it 10.5 hours?", "Yes!"]);
/// ```
pub fn create_sentence_list<'t>(text: impl Into<Option<&'t str>>) -> Vec<String> {
    let Some(text) = text.into().filter(|text| !text.is_empty()) else {
        return Vec::new();
    };

    let tokens = WhitespaceTokenizer::new().split(text);
    let mut sentences = Vec::new();
    let mut start = 0;

    // The last chunk always closes the final sentence.
    if let Some((_, body)) = tokens.split_last() {
        for token in body {
            if ends_sentence(&token.text) {
                push_trimmed(&mut sentences, &text[start..token.end_offset]);
                start = token.end_offset;
            }
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, sentence: &str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

/// Check whether a whitespace-delimited chunk closes a sentence.
fn ends_sentence(chunk: &str) -> bool {
    let core = chunk.trim_end_matches(CLOSERS);
    let Some(last) = core.chars().last() else {
        return false;
    };

    match last {
        '!' | '?' => true,
        '.' => {
            let stem = core.trim_end_matches('.');
            // An ellipsis always ends the sentence.
            core.len() - stem.len() > 1 || !is_abbreviation(stem.trim_start_matches(OPENERS))
        }
        _ => false,
    }
}

fn is_abbreviation(stem: &str) -> bool {
    if stem.is_empty() {
        return false;
    }

    let mut chars = stem.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_alphabetic()
    {
        return true;
    }

    if stem.contains('.') {
        return stem.split('.').all(|part| {
            !part.is_empty() && part.chars().count() <= 2 && part.chars().all(char::is_alphabetic)
        });
    }

    ABBREVIATION_SET.contains(stem.to_lowercase().as_str())
}
