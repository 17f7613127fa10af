//! Command line argument parsing for the preprocessing CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// preprocessing - text clean-up filters and a frequency-ranked spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "preprocessing")]
#[command(about = "Text clean-up filters and a frequency-ranked spelling corrector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PreprocessingArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Reference corpus for the spelling corrector
    #[arg(long, value_name = "CORPUS_FILE", env = "PREPROCESSING_CORPUS", global = true)]
    pub corpus: Option<PathBuf>,

    /// Vocabulary snapshot, read when present and written after a corpus build
    #[arg(long = "snapshot-path", value_name = "SNAPSHOT_FILE", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PreprocessingArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct the spelling of individual words
    Correct(CorrectArgs),

    /// Correct every word of a text
    #[command(name = "correct-text")]
    CorrectText(TextArgs),

    /// List ranked suggestions for a word
    Suggest(SuggestArgs),

    /// Show the candidate tier and candidates for a word
    Candidates(WordArgs),

    /// Apply a chain of transforms to a text
    Preprocess(PreprocessArgs),

    /// Split a text into sentences
    Sentences(TextArgs),

    /// Extract keywords from a text
    Keywords(TextArgs),

    /// Correct a JSON array of words in parallel
    Batch(BatchArgs),

    /// Inspect or export the vocabulary
    Vocab(VocabArgs),
}

/// Arguments for word correction
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for commands taking a single word
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of suggestions (defaults to the configured value)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for commands taking a text
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Text to process (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for the transform pipeline
#[derive(Parser, Debug, Clone)]
pub struct PreprocessArgs {
    /// Text to process (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Transform to apply, in order (repeatable; defaults to the configured list)
    #[arg(short, long = "transform", value_name = "NAME")]
    pub transforms: Vec<String>,
}

/// Arguments for batch correction
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// JSON file holding an array of strings or nulls
    #[arg(value_name = "BATCH_FILE")]
    pub file: PathBuf,
}

/// Arguments for vocabulary commands
#[derive(Parser, Debug, Clone)]
pub struct VocabArgs {
    #[command(subcommand)]
    pub command: VocabCommand,
}

/// Vocabulary subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum VocabCommand {
    /// Show vocabulary statistics
    Stats(VocabStatsArgs),

    /// Write the vocabulary to a frequency file and/or a snapshot
    Export(VocabExportArgs),
}

/// Arguments for vocabulary statistics
#[derive(Parser, Debug, Clone)]
pub struct VocabStatsArgs {
    /// Number of most frequent words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Arguments for vocabulary export
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = true)]
pub struct VocabExportArgs {
    /// Write a "word count" frequency file
    #[arg(long, value_name = "FILE")]
    pub frequency: Option<PathBuf>,

    /// Write a binary snapshot
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
