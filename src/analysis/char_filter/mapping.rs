use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{PreprocessingError, Result};

/// A char filter that replaces literal strings using a mapping table.
///
/// All keys are searched in a single pass; where keys overlap the longest
/// match starting at the leftmost position wins.
#[derive(Debug)]
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    /// Build a filter from `(from, to)` pairs. Later duplicates of a key are ignored.
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut keys: Vec<String> = Vec::new();
        let mut replacements = Vec::new();

        for (key, value) in mapping {
            let key = key.into();
            if key.is_empty() || keys.contains(&key) {
                continue;
            }
            keys.push(key);
            replacements.push(value.into());
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| PreprocessingError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }

    /// Number of mapped keys.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Check if the mapping table is empty.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_char_filter() {
        let filter = MappingCharFilter::new(vec![("ph", "f"), ("qu", "k")]).unwrap();
        assert_eq!(filter.filter("phone queue"), "fone keue");
    }

    #[test]
    fn test_mapping_expansion() {
        let filter = MappingCharFilter::new(vec![("a", "aaa")]).unwrap();
        assert_eq!(filter.filter("bab"), "baaab");
    }

    #[test]
    fn test_longest_match_wins() {
        let filter = MappingCharFilter::new(vec![("ﬀ", "ff"), ("ﬀi", "ffi!")]).unwrap();
        assert_eq!(filter.filter("oﬀice"), "offi!ce");
    }

    #[test]
    fn test_duplicate_and_empty_keys() {
        let filter = MappingCharFilter::new(vec![("x", "1"), ("", "?"), ("x", "2")]).unwrap();
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.filter("axb"), "a1b");
    }

    #[test]
    fn test_empty_mapping() {
        let filter = MappingCharFilter::new(Vec::<(String, String)>::new()).unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter.filter("unchanged"), "unchanged");
    }
}
