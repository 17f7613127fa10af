//! Word-frequency vocabulary built from a reference corpus.
//!
//! The vocabulary is the only shared state of the spelling corrector. It is
//! built once (from a corpus, a frequency file or a binary snapshot) and is
//! never mutated afterwards, so it can be shared across threads through an
//! [`Arc`](std::sync::Arc) without locking.
//!
//! # Examples
//!
//! ```
//! use preprocessing::spelling::vocabulary::Vocabulary;
//!
//! let vocabulary = Vocabulary::from_corpus("The cat sat on the mat.");
//! assert!(vocabulary.contains("the"));
//! assert_eq!(vocabulary.frequency("the"), 2);
//! assert_eq!(vocabulary.total_count(), 6);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::LazyLock;

use ahash::AHashMap;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, info, warn};
use memmap2::MmapOptions;
use regex::Regex;

use crate::error::{PreprocessingError, Result};

/// Maximal runs of word characters (letters, digits, underscore).
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern should be valid"));

const SNAPSHOT_MAGIC: &[u8; 4] = b"PPVC";
const SNAPSHOT_VERSION: u32 = 1;

/// An immutable mapping from lowercase word to occurrence count.
///
/// Invariant: `total_count` is the sum of all stored counts and no stored
/// count is zero, so a word is "in the vocabulary" exactly when it is a key.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Words and their occurrence counts
    words: AHashMap<String, u64>,
    /// Sum of all counts, used as the probability denominator
    total_count: u64,
}

impl Vocabulary {
    /// Build a vocabulary from free text.
    ///
    /// Every maximal run of word characters is lowercased and counted.
    pub fn from_corpus(text: &str) -> Self {
        let mut words: AHashMap<String, u64> = AHashMap::new();
        let mut total_count = 0u64;

        for word in WORD_PATTERN.find_iter(text) {
            *words.entry(word.as_str().to_lowercase()).or_insert(0) += 1;
            total_count += 1;
        }

        debug!(
            "built vocabulary of {} distinct words from {} tokens",
            words.len(),
            total_count
        );

        Vocabulary { words, total_count }
    }

    /// Build a vocabulary from explicit `(word, count)` pairs.
    ///
    /// Words are stored as given. Zero counts are dropped and repeated words
    /// accumulate their counts. Counts summing past `u64::MAX` are a
    /// [`PreprocessingError::Corpus`].
    pub fn from_counts<I, S>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut words: AHashMap<String, u64> = AHashMap::new();
        let mut total_count = 0u64;

        for (word, count) in counts {
            if count == 0 {
                continue;
            }
            let word = word.into();
            total_count = total_count.checked_add(count).ok_or_else(|| {
                PreprocessingError::corpus(format!(
                    "total word count overflows at {word:?} ({count})"
                ))
            })?;
            // Bounded by total_count.
            *words.entry(word).or_insert(0) += count;
        }

        Ok(Vocabulary { words, total_count })
    }

    /// Build a vocabulary from a plain-text corpus file.
    ///
    /// The file is memory-mapped only for the duration of the build. A
    /// missing, unreadable, non-UTF-8 or word-less corpus is a startup
    /// failure reported as [`PreprocessingError::Corpus`].
    pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PreprocessingError::corpus(format!("failed to open {}: {e}", path.display()))
        })?;

        let length = file.metadata()?.len();
        if length == 0 {
            return Err(PreprocessingError::corpus(format!(
                "{} is empty",
                path.display()
            )));
        }

        let vocabulary = {
            let mmap = unsafe {
                MmapOptions::new().map(&file).map_err(|e| {
                    PreprocessingError::corpus(format!("failed to mmap {}: {e}", path.display()))
                })?
            };
            let text = std::str::from_utf8(&mmap).map_err(|e| {
                PreprocessingError::corpus(format!("{} is not UTF-8: {e}", path.display()))
            })?;
            Self::from_corpus(text)
        };

        if vocabulary.is_empty() {
            return Err(PreprocessingError::corpus(format!(
                "{} contains no words",
                path.display()
            )));
        }

        info!(
            "loaded corpus {} ({} bytes, {} distinct words)",
            path.display(),
            length,
            vocabulary.len()
        );
        Ok(vocabulary)
    }

    /// Load a frequency file with one "word count" pair per line.
    ///
    /// Malformed lines are skipped with a warning.
    pub fn load_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PreprocessingError::corpus(format!("failed to open {}: {e}", path.display()))
        })?;
        let reader = BufReader::new(file);
        let mut counts = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                PreprocessingError::corpus(format!(
                    "failed to read line {} of {}: {e}",
                    line_num + 1,
                    path.display()
                ))
            })?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            if let [word, count] = parts.as_slice()
                && let Ok(count) = count.parse::<u64>()
            {
                counts.push((word.to_lowercase(), count));
            } else {
                warn!(
                    "skipping malformed line {} in {}: {line:?}",
                    line_num + 1,
                    path.display()
                );
            }
        }

        let vocabulary = Self::from_counts(counts)?;
        if vocabulary.is_empty() {
            return Err(PreprocessingError::corpus(format!(
                "{} contains no words",
                path.display()
            )));
        }

        info!(
            "loaded frequency file {} ({} distinct words)",
            path.display(),
            vocabulary.len()
        );
        Ok(vocabulary)
    }

    /// Save the vocabulary as a frequency file, most frequent words first.
    pub fn save_frequency_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);

        for (word, count) in self.sorted_entries() {
            writeln!(writer, "{word} {count}")?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Save a binary snapshot: magic, version, CRC32 and a bincode payload.
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let entries: Vec<(&str, u64)> = self.sorted_entries();
        let payload = bincode::serialize(&entries)?;

        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(SNAPSHOT_MAGIC)?;
        writer.write_u32::<LittleEndian>(SNAPSHOT_VERSION)?;
        writer.write_u32::<LittleEndian>(crc32fast::hash(&payload))?;
        writer.write_u64::<LittleEndian>(payload.len() as u64)?;
        writer.write_all(&payload)?;
        writer.flush()?;

        Ok(())
    }

    /// Load a snapshot written by [`Vocabulary::save_snapshot`].
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PreprocessingError::corpus(format!("failed to open {}: {e}", path.display()))
        })?;
        let mut reader = BufReader::new(file);
        let truncated = |e: std::io::Error| {
            PreprocessingError::corpus(format!("snapshot {} is truncated: {e}", path.display()))
        };

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic).map_err(truncated)?;
        if &magic != SNAPSHOT_MAGIC {
            return Err(PreprocessingError::corpus(format!(
                "{} is not a vocabulary snapshot",
                path.display()
            )));
        }

        let version = reader.read_u32::<LittleEndian>().map_err(truncated)?;
        if version != SNAPSHOT_VERSION {
            return Err(PreprocessingError::corpus(format!(
                "unsupported snapshot version {version} in {}",
                path.display()
            )));
        }

        let checksum = reader.read_u32::<LittleEndian>().map_err(truncated)?;
        let length = reader.read_u64::<LittleEndian>().map_err(truncated)?;
        let mut payload = Vec::new();
        reader
            .take(length)
            .read_to_end(&mut payload)
            .map_err(truncated)?;

        if payload.len() as u64 != length || crc32fast::hash(&payload) != checksum {
            return Err(PreprocessingError::corpus(format!(
                "snapshot {} is corrupted",
                path.display()
            )));
        }

        let entries: Vec<(String, u64)> = bincode::deserialize(&payload).map_err(|e| {
            PreprocessingError::corpus(format!("snapshot {} is corrupted: {e}", path.display()))
        })?;
        let vocabulary = Self::from_counts(entries)?;
        if vocabulary.is_empty() {
            return Err(PreprocessingError::corpus(format!(
                "snapshot {} contains no words",
                path.display()
            )));
        }

        info!(
            "loaded snapshot {} ({} distinct words)",
            path.display(),
            vocabulary.len()
        );
        Ok(vocabulary)
    }

    /// Check if a word has a positive count.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Get the count of a word, 0 when absent.
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Get the relative frequency of a word (count / total count).
    pub fn probability(&self, word: &str) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.frequency(word) as f64 / self.total_count as f64
    }

    /// Sum of all counts.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the most frequent words, ties ordered by word.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u64)> {
        self.sorted_entries()
            .into_iter()
            .take(limit)
            .map(|(word, count)| (word.to_string(), count))
            .collect()
    }

    fn sorted_entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .words
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_corpus() {
        let corpus = "The quick brown fox jumps over the lazy dog. The dog was lazy.";
        let vocabulary = Vocabulary::from_corpus(corpus);

        assert!(vocabulary.contains("the"));
        assert!(vocabulary.contains("quick"));
        assert!(!vocabulary.contains("The"));
        assert_eq!(vocabulary.frequency("the"), 3);
        assert_eq!(vocabulary.frequency("dog"), 2);
        assert_eq!(vocabulary.frequency("lazy"), 2);
        assert_eq!(vocabulary.frequency("quick"), 1);
        assert_eq!(vocabulary.total_count(), 13);
    }

    #[test]
    fn test_corpus_word_characters() {
        let vocabulary = Vocabulary::from_corpus("snake_case 42 isn't café");

        assert!(vocabulary.contains("snake_case"));
        assert!(vocabulary.contains("42"));
        assert!(vocabulary.contains("isn"));
        assert!(vocabulary.contains("t"));
        assert!(vocabulary.contains("café"));
        assert_eq!(vocabulary.len(), 5);
    }

    #[test]
    fn test_total_count_is_sum_of_counts() {
        let vocabulary = Vocabulary::from_counts(vec![("a", 3), ("b", 0), ("c", 4), ("a", 1)]).unwrap();

        assert_eq!(vocabulary.frequency("a"), 4);
        assert!(!vocabulary.contains("b"));
        assert_eq!(vocabulary.total_count(), 8);
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn test_probability() {
        let vocabulary = Vocabulary::from_counts(vec![("hello", 6), ("world", 4)]).unwrap();

        assert!((vocabulary.probability("hello") - 0.6).abs() < 1e-9);
        assert!((vocabulary.probability("world") - 0.4).abs() < 1e-9);
        assert_eq!(vocabulary.probability("nonexistent"), 0.0);
        assert_eq!(Vocabulary::default().probability("hello"), 0.0);
    }

    #[test]
    fn test_most_frequent() {
        let vocabulary =
            Vocabulary::from_counts(vec![("common", 100), ("rare", 1), ("medium", 50), ("also", 50)]).unwrap();

        let top = vocabulary.most_frequent(3);
        assert_eq!(
            top,
            vec![
                ("common".to_string(), 100),
                ("also".to_string(), 50),
                ("medium".to_string(), 50),
            ]
        );
    }

    #[test]
    fn test_load_corpus() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "Hello world.\nHello again, WORLD!").unwrap();
        temp_file.flush().unwrap();

        let vocabulary = Vocabulary::load_corpus(temp_file.path()).unwrap();
        assert_eq!(vocabulary.frequency("hello"), 2);
        assert_eq!(vocabulary.frequency("world"), 2);
        assert_eq!(vocabulary.frequency("again"), 1);
    }

    #[test]
    fn test_load_corpus_failures() {
        let missing = Vocabulary::load_corpus("/definitely/not/a/corpus.txt");
        assert!(matches!(missing, Err(PreprocessingError::Corpus(_))));

        let empty = NamedTempFile::new().unwrap();
        let result = Vocabulary::load_corpus(empty.path());
        assert!(matches!(result, Err(PreprocessingError::Corpus(_))));

        let mut punctuation = NamedTempFile::new().unwrap();
        write!(punctuation, "... !!! ???").unwrap();
        punctuation.flush().unwrap();
        let result = Vocabulary::load_corpus(punctuation.path());
        assert!(matches!(result, Err(PreprocessingError::Corpus(_))));
    }

    #[test]
    fn test_frequency_file_round_trip() {
        let vocabulary = Vocabulary::from_counts(vec![("hello", 5), ("world", 3)]).unwrap();

        let temp_file = NamedTempFile::new().unwrap();
        vocabulary.save_frequency_file(temp_file.path()).unwrap();

        let contents = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(contents, "hello 5\nworld 3\n");

        let loaded = Vocabulary::load_frequency_file(temp_file.path()).unwrap();
        assert_eq!(loaded.frequency("hello"), 5);
        assert_eq!(loaded.frequency("world"), 3);
        assert_eq!(loaded.total_count(), 8);
    }

    #[test]
    fn test_frequency_file_skips_malformed_lines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello 5").unwrap();
        writeln!(temp_file, "broken").unwrap();
        writeln!(temp_file, "world many").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "Test 2").unwrap();
        temp_file.flush().unwrap();

        let loaded = Vocabulary::load_frequency_file(temp_file.path()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.frequency("test"), 2);
    }

    #[test]
    fn test_snapshot() {
        let vocabulary = Vocabulary::from_corpus("one two two three three three");

        let temp_file = NamedTempFile::new().unwrap();
        vocabulary.save_snapshot(temp_file.path()).unwrap();

        let loaded = Vocabulary::load_snapshot(temp_file.path()).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.frequency("three"), 3);
        assert_eq!(loaded.total_count(), vocabulary.total_count());
    }

    #[test]
    fn test_corrupted_snapshot() {
        let vocabulary = Vocabulary::from_corpus("one two two three three three");
        let temp_file = NamedTempFile::new().unwrap();
        vocabulary.save_snapshot(temp_file.path()).unwrap();

        let mut bytes = std::fs::read(temp_file.path()).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        std::fs::write(temp_file.path(), &bytes).unwrap();

        let result = Vocabulary::load_snapshot(temp_file.path());
        assert!(matches!(result, Err(PreprocessingError::Corpus(_))));

        let mut not_snapshot = NamedTempFile::new().unwrap();
        write!(not_snapshot, "hello 5\n").unwrap();
        not_snapshot.flush().unwrap();
        let result = Vocabulary::load_snapshot(not_snapshot.path());
        assert!(matches!(result, Err(PreprocessingError::Corpus(_))));
    }

    #[test]
    fn test_truncated_snapshot() {
        let vocabulary = Vocabulary::from_corpus("one two two three three three");
        let temp_file = NamedTempFile::new().unwrap();
        vocabulary.save_snapshot(temp_file.path()).unwrap();
        let bytes = std::fs::read(temp_file.path()).unwrap();

        // Cut inside the header, then inside the payload.
        for cut in [6, bytes.len() - 3] {
            std::fs::write(temp_file.path(), &bytes[..cut]).unwrap();
            let result = Vocabulary::load_snapshot(temp_file.path());
            assert!(matches!(result, Err(PreprocessingError::Corpus(_))));
        }
    }

    #[test]
    fn test_undecodable_snapshot_payload() {
        let payload = [0xFFu8; 4];
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SNAPSHOT_MAGIC).unwrap();
        temp_file.write_u32::<LittleEndian>(SNAPSHOT_VERSION).unwrap();
        temp_file
            .write_u32::<LittleEndian>(crc32fast::hash(&payload))
            .unwrap();
        temp_file
            .write_u64::<LittleEndian>(payload.len() as u64)
            .unwrap();
        temp_file.write_all(&payload).unwrap();
        temp_file.flush().unwrap();

        let result = Vocabulary::load_snapshot(temp_file.path());
        assert!(matches!(result, Err(PreprocessingError::Corpus(_))));
    }

    #[test]
    fn test_count_overflow() {
        let result = Vocabulary::from_counts(vec![("a", u64::MAX), ("b", 1)]);
        assert!(matches!(result, Err(PreprocessingError::Corpus(_))));

        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "a {}", u64::MAX).unwrap();
        writeln!(temp_file, "b {}", u64::MAX).unwrap();
        temp_file.flush().unwrap();

        let result = Vocabulary::load_frequency_file(temp_file.path());
        assert!(matches!(result, Err(PreprocessingError::Corpus(_))));
    }

    #[test]
    fn test_frequency_file_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"hello 5\n\xFF\xFE 3\n").unwrap();
        temp_file.flush().unwrap();

        let result = Vocabulary::load_frequency_file(temp_file.path());
        assert!(matches!(result, Err(PreprocessingError::Corpus(_))));
    }
}
