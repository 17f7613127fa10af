//! Command implementations for the preprocessing CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde_json::Value;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::Config;
use crate::error::{PreprocessingError, Result};
use crate::spelling::corrector::SpellingCorrector;
use crate::text::{self, Transform};

/// Execute a CLI command.
pub fn execute_command(args: PreprocessingArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Correct(correct_args) => correct_words(correct_args, &config, &args),
        Command::CorrectText(text_args) => correct_text(text_args, &config, &args),
        Command::Suggest(suggest_args) => suggest(suggest_args, &config, &args),
        Command::Candidates(word_args) => candidates(word_args, &config, &args),
        Command::Preprocess(preprocess_args) => preprocess(preprocess_args, &config, &args),
        Command::Sentences(text_args) => sentences(text_args, &args),
        Command::Keywords(text_args) => keywords(text_args, &args),
        Command::Batch(batch_args) => batch(batch_args, &config, &args),
        Command::Vocab(vocab_args) => match &vocab_args.command {
            VocabCommand::Stats(stats_args) => vocab_stats(stats_args, &config, &args),
            VocabCommand::Export(export_args) => vocab_export(export_args, &config, &args),
        },
    }
}

/// Load the configuration file, then apply command line overrides.
fn load_config(args: &PreprocessingArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(corpus) = &args.corpus {
        config.corpus_path = Some(corpus.clone());
    }
    if let Some(snapshot) = &args.snapshot {
        config.snapshot_path = Some(snapshot.clone());
    }

    Ok(config)
}

fn build_corrector(config: &Config) -> Result<SpellingCorrector> {
    let start_time = Instant::now();
    let corrector = config.build_corrector()?;
    info!(
        "Vocabulary ready: {} words in {} ms",
        corrector.vocabulary().len(),
        start_time.elapsed().as_millis()
    );
    Ok(corrector)
}

fn read_text(text: &Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text.clone()),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Correct individual words.
fn correct_words(args: &CorrectArgs, config: &Config, cli_args: &PreprocessingArgs) -> Result<()> {
    let corrector = build_corrector(config)?;

    let corrections = args
        .words
        .iter()
        .map(|word| {
            let correction = corrector.correct_word(word.as_str());
            WordCorrection {
                changed: correction != *word,
                word: word.clone(),
                correction,
            }
        })
        .collect();

    output_result(
        "Corrected words",
        &CorrectionResults { corrections },
        cli_args,
    )
}

/// Correct every word of a text.
fn correct_text(args: &TextArgs, config: &Config, cli_args: &PreprocessingArgs) -> Result<()> {
    let corrector = build_corrector(config)?;
    let input = read_text(&args.text)?;
    let output = text::correct_spelling(input.as_str(), &corrector);

    output_result("Corrected text", &TextResult { input, output }, cli_args)
}

/// Rank suggestions for a word.
fn suggest(args: &SuggestArgs, config: &Config, cli_args: &PreprocessingArgs) -> Result<()> {
    let mut config = config.clone();
    if let Some(limit) = args.limit {
        config.spelling.max_suggestions = limit;
    }
    let corrector = build_corrector(&config)?;

    let result = SuggestionList {
        word: args.word.clone(),
        known: corrector.is_correct(&args.word),
        suggestions: corrector.suggest(&args.word),
    };

    output_result("Suggestions", &result, cli_args)
}

/// Show the candidate tier for a word.
fn candidates(args: &WordArgs, config: &Config, cli_args: &PreprocessingArgs) -> Result<()> {
    let corrector = build_corrector(config)?;
    let candidates = corrector.find_candidates(&args.word);

    let result = CandidateList {
        word: args.word.clone(),
        tier: candidates.tier(),
        edit_distance: candidates.tier().distance(),
        candidates: candidates.into_words().into_iter().collect(),
    };

    output_result("Candidates", &result, cli_args)
}

/// Apply a transform pipeline.
fn preprocess(args: &PreprocessArgs, config: &Config, cli_args: &PreprocessingArgs) -> Result<()> {
    let transforms = args
        .transforms
        .iter()
        .map(|name| name.parse())
        .collect::<Result<Vec<Transform>>>()?;

    let pipeline = config.build_pipeline(&transforms)?;
    debug!(
        "Pipeline: {}",
        pipeline
            .transforms()
            .iter()
            .map(Transform::name)
            .collect::<Vec<_>>()
            .join(" -> ")
    );

    let input = read_text(&args.text)?;
    let output = pipeline.apply(input.as_str())?;

    output_result("Preprocessed text", &TextResult { input, output }, cli_args)
}

/// Split a text into sentences.
fn sentences(args: &TextArgs, cli_args: &PreprocessingArgs) -> Result<()> {
    let input = read_text(&args.text)?;
    let sentences = text::create_sentence_list(input.as_str());

    output_result("Sentences", &SentenceList { sentences }, cli_args)
}

/// Extract keywords.
fn keywords(args: &TextArgs, cli_args: &PreprocessingArgs) -> Result<()> {
    let input = read_text(&args.text)?;
    let output = text::keyword_tokenize(input.as_str())?;

    output_result("Keywords", &TextResult { input, output }, cli_args)
}

/// Correct a JSON array of words in parallel.
fn batch(args: &BatchArgs, config: &Config, cli_args: &PreprocessingArgs) -> Result<()> {
    let words = read_batch_file(&args.file)?;
    let corrector = build_corrector(config)?;

    let start_time = Instant::now();
    let corrected = corrector.correct_batch(&words);
    info!(
        "Corrected {} words in {} ms",
        corrected.len(),
        start_time.elapsed().as_millis()
    );

    output_result("Batch corrections", &BatchResult { corrected }, cli_args)
}

/// Read a batch file: a JSON array whose elements are strings, or null for
/// the empty word.
fn read_batch_file(path: &Path) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    let Value::Array(items) = value else {
        return Err(PreprocessingError::invalid_input(format!(
            "{} does not hold a JSON array",
            path.display()
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(word) => Ok(word),
            Value::Null => Ok(String::new()),
            other => Err(PreprocessingError::invalid_input(format!(
                "element {index} is not a string: {other}"
            ))),
        })
        .collect()
}

/// Show vocabulary statistics.
fn vocab_stats(args: &VocabStatsArgs, config: &Config, cli_args: &PreprocessingArgs) -> Result<()> {
    let vocabulary = config.build_vocabulary()?;

    let result = VocabularyStats {
        unique_words: vocabulary.len(),
        total_count: vocabulary.total_count(),
        most_frequent: vocabulary
            .most_frequent(args.top)
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect(),
    };

    output_result("Vocabulary statistics", &result, cli_args)
}

/// Export the vocabulary.
fn vocab_export(
    args: &VocabExportArgs,
    config: &Config,
    cli_args: &PreprocessingArgs,
) -> Result<()> {
    let vocabulary = config.build_vocabulary()?;

    if let Some(path) = &args.frequency {
        vocabulary.save_frequency_file(path)?;
        info!("Wrote frequency file {}", path.display());
    }
    if let Some(path) = &args.snapshot {
        vocabulary.save_snapshot(path)?;
        info!("Wrote snapshot {}", path.display());
    }

    let result = ExportResult {
        unique_words: vocabulary.len(),
        frequency_path: args.frequency.clone(),
        snapshot_path: args.snapshot.clone(),
    };

    output_result("Vocabulary exported", &result, cli_args)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_batch_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "batch.json", r#"["hte", null, "", "terts"]"#);
        assert_eq!(read_batch_file(&path).unwrap(), vec!["hte", "", "", "terts"]);
    }

    #[test]
    fn test_read_batch_file_rejects_non_strings() {
        let dir = TempDir::new().unwrap();

        let path = write(&dir, "numbers.json", r#"["hte", 42]"#);
        let err = read_batch_file(&path).unwrap_err();
        assert!(matches!(err, PreprocessingError::InvalidInput(_)));
        assert!(err.to_string().contains("element 1"));

        let path = write(&dir, "object.json", r#"{"word": "hte"}"#);
        assert!(matches!(
            read_batch_file(&path).unwrap_err(),
            PreprocessingError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_command_line_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write(
            &dir,
            "config.json",
            r#"{"corpus_path": "from-file.txt", "snapshot_path": "from-file.vocab"}"#,
        );

        let args = PreprocessingArgs {
            verbose: 0,
            quiet: true,
            output_format: OutputFormat::Json,
            pretty: false,
            config: Some(config_path),
            corpus: Some("from-flag.txt".into()),
            snapshot: None,
            command: Command::Sentences(TextArgs {
                text: Some("One. Two.".to_string()),
            }),
        };

        let config = load_config(&args).unwrap();
        assert_eq!(config.corpus_path, Some("from-flag.txt".into()));
        assert_eq!(config.snapshot_path, Some("from-file.vocab".into()));
    }

    #[test]
    fn test_execute_without_corpus_fails() {
        let args = PreprocessingArgs {
            verbose: 0,
            quiet: true,
            output_format: OutputFormat::Json,
            pretty: false,
            config: None,
            corpus: None,
            snapshot: None,
            command: Command::Correct(CorrectArgs {
                words: vec!["hte".to_string()],
            }),
        };

        assert!(matches!(
            execute_command(args).unwrap_err(),
            PreprocessingError::Corpus(_)
        ));
    }

    #[test]
    fn test_unknown_transform_is_function_error() {
        let args = PreprocessingArgs {
            verbose: 0,
            quiet: true,
            output_format: OutputFormat::Json,
            pretty: false,
            config: None,
            corpus: None,
            snapshot: None,
            command: Command::Preprocess(PreprocessArgs {
                text: Some("text".to_string()),
                transforms: vec!["shout".to_string()],
            }),
        };

        assert!(matches!(
            execute_command(args).unwrap_err(),
            PreprocessingError::Function(_)
        ));
    }
}
