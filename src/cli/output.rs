//! Output formatting for CLI commands.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PreprocessingArgs};
use crate::error::Result;
use crate::spelling::candidates::CandidateTier;
use crate::spelling::ranker::Suggestion;

/// Results that know how to print themselves for people.
///
/// The default prints every field as `key: value`.
pub trait HumanOutput: Serialize {
    fn print_human(&self) -> Result<()> {
        output_generic_human(&serde_json::to_value(self)?);
        Ok(())
    }
}

/// Result of correcting a single word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCorrection {
    pub word: String,
    pub correction: String,
    pub changed: bool,
}

/// Result of correcting several words.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResults {
    pub corrections: Vec<WordCorrection>,
}

impl HumanOutput for CorrectionResults {
    fn print_human(&self) -> Result<()> {
        for correction in &self.corrections {
            if correction.changed {
                println!("{} -> {}", correction.word, correction.correction);
            } else {
                println!("{}", correction.word);
            }
        }
        Ok(())
    }
}

/// Result of a text-to-text operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextResult {
    pub input: String,
    pub output: String,
}

impl HumanOutput for TextResult {
    fn print_human(&self) -> Result<()> {
        println!("{}", self.output);
        Ok(())
    }
}

/// Result of sentence splitting.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceList {
    pub sentences: Vec<String>,
}

impl HumanOutput for SentenceList {
    fn print_human(&self) -> Result<()> {
        for sentence in &self.sentences {
            println!("{sentence}");
        }
        Ok(())
    }
}

/// Ranked suggestions for a word.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionList {
    pub word: String,
    pub known: bool,
    pub suggestions: Vec<Suggestion>,
}

impl HumanOutput for SuggestionList {
    fn print_human(&self) -> Result<()> {
        if self.known {
            println!("{} is spelled correctly", self.word);
        }
        if self.suggestions.is_empty() {
            println!("No suggestions for {}", self.word);
        }
        for (rank, suggestion) in self.suggestions.iter().enumerate() {
            println!(
                "{}. {} (frequency: {}, probability: {:.6})",
                rank + 1,
                suggestion.word,
                suggestion.frequency,
                suggestion.probability
            );
        }
        Ok(())
    }
}

/// Candidate set for a word.
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateList {
    pub word: String,
    pub tier: CandidateTier,
    pub edit_distance: Option<usize>,
    pub candidates: Vec<String>,
}

impl HumanOutput for CandidateList {}

/// Result of batch correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResult {
    pub corrected: Vec<String>,
}

impl HumanOutput for BatchResult {
    fn print_human(&self) -> Result<()> {
        for word in &self.corrected {
            println!("{word}");
        }
        Ok(())
    }
}

/// A word and its count.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Vocabulary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub unique_words: usize,
    pub total_count: u64,
    pub most_frequent: Vec<WordCount>,
}

impl HumanOutput for VocabularyStats {
    fn print_human(&self) -> Result<()> {
        println!("Vocabulary Statistics:");
        println!("══════════════════════");
        println!("Unique words: {}", self.unique_words);
        println!("Total count: {}", self.total_count);

        if !self.most_frequent.is_empty() {
            println!();
            println!("Most frequent:");
            println!("──────────────");
            for entry in &self.most_frequent {
                println!("  {} ({})", entry.word, entry.count);
            }
        }
        Ok(())
    }
}

/// Result of a vocabulary export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResult {
    pub unique_words: usize,
    pub frequency_path: Option<PathBuf>,
    pub snapshot_path: Option<PathBuf>,
}

impl HumanOutput for ExportResult {}

/// Output a result in the specified format.
pub fn output_result<T: HumanOutput>(
    message: &str,
    result: &T,
    args: &PreprocessingArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &PreprocessingArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human()
}

/// Output in generic human format.
fn output_generic_human(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PreprocessingArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    })
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}
