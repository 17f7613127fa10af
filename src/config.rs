//! Configuration for the preprocessing toolkit.
//!
//! A configuration file is JSON. Every field is optional:
//!
//! ```json
//! {
//!   "corpus_path": "data/big.txt",
//!   "snapshot_path": "data/big.vocab",
//!   "ligatures_path": "data/ligatures.json",
//!   "transforms": ["lowercase", "remove_urls", "remove_unbound_punct"],
//!   "spelling": { "max_suggestions": 3, "max_two_edit_candidates": 500 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::ligature;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::error::{PreprocessingError, Result};
use crate::spelling::corrector::{CorrectorConfig, SpellingCorrector};
use crate::spelling::vocabulary::Vocabulary;
use crate::text::pipeline::{Pipeline, Transform};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Plain-text reference corpus.
    pub corpus_path: Option<PathBuf>,

    /// Binary vocabulary snapshot. Loaded in preference to the other
    /// sources, and written after a frequency-file or corpus build when it
    /// does not exist yet.
    pub snapshot_path: Option<PathBuf>,

    /// "word count" frequency file.
    pub frequency_path: Option<PathBuf>,

    /// JSON ligature table replacing the built-in one.
    pub ligatures_path: Option<PathBuf>,

    /// Transforms applied by `preprocess` when none are given explicitly.
    pub transforms: Vec<Transform>,

    /// Spelling corrector settings.
    pub spelling: CorrectorConfig,
}

impl Config {
    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PreprocessingError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Build the vocabulary from the configured sources.
    ///
    /// An existing snapshot wins, then the frequency file, then the corpus.
    /// A vocabulary built from either text source is cached to the snapshot
    /// path when one is configured. No usable source is a corpus error.
    pub fn build_vocabulary(&self) -> Result<Vocabulary> {
        if let Some(snapshot) = &self.snapshot_path
            && snapshot.exists()
        {
            return Vocabulary::load_snapshot(snapshot);
        }

        let vocabulary = if let Some(frequency) = &self.frequency_path {
            Vocabulary::load_frequency_file(frequency)?
        } else if let Some(corpus) = &self.corpus_path {
            Vocabulary::load_corpus(corpus)?
        } else {
            return Err(PreprocessingError::corpus(match &self.snapshot_path {
                Some(snapshot) => format!("snapshot {} does not exist", snapshot.display()),
                None => "no corpus, frequency file or snapshot configured".to_string(),
            }));
        };

        if let Some(snapshot) = &self.snapshot_path {
            vocabulary.save_snapshot(snapshot)?;
            info!("Wrote vocabulary snapshot to {}", snapshot.display());
        }

        Ok(vocabulary)
    }

    /// Build a spelling corrector over the configured vocabulary.
    pub fn build_corrector(&self) -> Result<SpellingCorrector> {
        Ok(SpellingCorrector::with_config(
            Arc::new(self.build_vocabulary()?),
            self.spelling.clone(),
        ))
    }

    /// Load the configured ligature table, if any.
    pub fn ligature_filter(&self) -> Result<Option<MappingCharFilter>> {
        self.ligatures_path
            .as_ref()
            .map(ligature::load_filter)
            .transpose()
    }

    /// Build a pipeline over `transforms`, falling back to the configured
    /// ones when empty. The corrector is only built when a transform needs it.
    pub fn build_pipeline(&self, transforms: &[Transform]) -> Result<Pipeline> {
        let transforms = if transforms.is_empty() {
            self.transforms.clone()
        } else {
            transforms.to_vec()
        };

        let needs_corrector = transforms.iter().any(Transform::needs_corrector);
        let mut pipeline = Pipeline::new(transforms);
        if needs_corrector {
            pipeline = pipeline.with_corrector(Arc::new(self.build_corrector()?));
        }
        if let Some(ligatures) = self.ligature_filter()? {
            pipeline = pipeline.with_ligatures(Arc::new(ligatures));
        }

        Ok(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "config.json",
            r#"{"corpus_path": "big.txt", "transforms": ["lowercase"], "spelling": {"max_suggestions": 2}}"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.corpus_path, Some(PathBuf::from("big.txt")));
        assert_eq!(config.transforms, vec![Transform::Lowercase]);
        assert_eq!(config.spelling.max_suggestions, 2);
        assert!(config.spelling.lowercase_input);
        assert!(config.snapshot_path.is_none());
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load(dir.path().join("missing.json")).unwrap_err(),
            PreprocessingError::Config(_)
        ));

        let path = write(&dir, "bad.json", r#"{"transforms": ["shout"]}"#);
        assert!(matches!(
            Config::load(&path).unwrap_err(),
            PreprocessingError::Json(_)
        ));
    }

    #[test]
    fn test_no_source_is_corpus_error() {
        let err = Config::default().build_vocabulary().unwrap_err();
        assert!(matches!(err, PreprocessingError::Corpus(_)));
    }

    #[test]
    fn test_corpus_build_writes_snapshot() {
        let dir = TempDir::new().unwrap();
        let corpus = write(&dir, "corpus.txt", "the cat sat on the mat");
        let snapshot = dir.path().join("corpus.vocab");

        let config = Config {
            corpus_path: Some(corpus.clone()),
            snapshot_path: Some(snapshot.clone()),
            ..Default::default()
        };
        let built = config.build_vocabulary().unwrap();
        assert!(snapshot.exists());
        assert_eq!(built.frequency("the"), 2);

        // The snapshot now wins even if the corpus disappears.
        fs::remove_file(&corpus).unwrap();
        let loaded = config.build_vocabulary().unwrap();
        assert_eq!(loaded.total_count(), built.total_count());
        assert_eq!(loaded.frequency("mat"), 1);
    }

    #[test]
    fn test_frequency_build_writes_snapshot() {
        let dir = TempDir::new().unwrap();
        let frequency = write(&dir, "freq.txt", "apple 3\npear 1\n");
        let snapshot = dir.path().join("freq.vocab");

        let config = Config {
            frequency_path: Some(frequency.clone()),
            snapshot_path: Some(snapshot.clone()),
            ..Default::default()
        };
        let built = config.build_vocabulary().unwrap();
        assert!(snapshot.exists());

        fs::remove_file(&frequency).unwrap();
        let loaded = config.build_vocabulary().unwrap();
        assert_eq!(loaded.total_count(), built.total_count());
        assert_eq!(loaded.frequency("apple"), 3);
    }

    #[test]
    fn test_frequency_file_before_corpus() {
        let dir = TempDir::new().unwrap();
        let frequency = write(&dir, "freq.txt", "apple 3\npear 1\n");
        let config = Config {
            frequency_path: Some(frequency),
            corpus_path: Some(dir.path().join("missing.txt")),
            ..Default::default()
        };

        let vocabulary = config.build_vocabulary().unwrap();
        assert_eq!(vocabulary.total_count(), 4);
    }

    #[test]
    fn test_build_pipeline() {
        let dir = TempDir::new().unwrap();
        let corpus = write(&dir, "corpus.txt", "the test");
        let ligatures = write(&dir, "ligatures.json", r#"{"0": {"ligature": "æ", "term": "e"}}"#);
        let config = Config {
            corpus_path: Some(corpus),
            ligatures_path: Some(ligatures),
            transforms: vec![Transform::Lowercase],
            ..Default::default()
        };

        let pipeline = config.build_pipeline(&[]).unwrap();
        assert_eq!(pipeline.apply("TÆST").unwrap(), "tæst");

        let pipeline = config
            .build_pipeline(&[
                Transform::Lowercase,
                Transform::ConvertLigatures,
                Transform::CorrectSpelling,
            ])
            .unwrap();
        assert_eq!(pipeline.apply("Hte TæST").unwrap(), "the test");
    }
}
