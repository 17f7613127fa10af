//! Error types for the preprocessing library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`PreprocessingError`] enum.
//!
//! # Examples
//!
//! ```
//! use preprocessing::error::{PreprocessingError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PreprocessingError::function("unknown transform: shout"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for preprocessing operations.
///
/// Empty or absent text is never an error: every text entry point maps it
/// to an empty result before doing any work.
#[derive(Error, Debug)]
pub enum PreprocessingError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A value that is not text reached a text entry point.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An invalid transform was requested from a pipeline.
    #[error("Function error: {0}")]
    Function(String),

    /// The reference corpus could not be turned into a vocabulary.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary snapshot encoding errors
    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PreprocessingError.
pub type Result<T> = std::result::Result<T, PreprocessingError>;

impl PreprocessingError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        PreprocessingError::InvalidInput(msg.into())
    }

    /// Create a new function error.
    pub fn function<S: Into<String>>(msg: S) -> Self {
        PreprocessingError::Function(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        PreprocessingError::Corpus(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PreprocessingError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PreprocessingError::Config(msg.into())
    }
}
