use regex::Regex;

use super::CharFilter;
use crate::error::{PreprocessingError, Result};

/// A char filter that replaces every match of a regex pattern.
///
/// The replacement is inserted literally; `$` has no special meaning.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| PreprocessingError::analysis(format!("Invalid regex pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that deletes every match of `pattern`.
    pub fn removing(pattern: &str) -> Result<Self> {
        Self::new(pattern, "")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.pattern.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacement);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
