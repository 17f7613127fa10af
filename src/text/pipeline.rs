//! Ordered chains of string transforms.
//!
//! # Examples
//!
//! ```
//! use preprocessing::text::{Transform, preprocess_text};
//!
//! let cleaned = preprocess_text(
//!     "Test\nString 1 ;.",
//!     &[
//!         Transform::Lowercase,
//!         Transform::RemoveEscChars,
//!         Transform::RemoveNumbers,
//!         Transform::RemoveUnboundPunct,
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(cleaned, "test string");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::error::{PreprocessingError, Result};
use crate::spelling::corrector::SpellingCorrector;
use crate::text;

/// A single string-to-string transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    ConvertHtmlEntities,
    ConvertLigatures,
    CorrectSpelling,
    KeywordTokenize,
    Lowercase,
    RemoveEscChars,
    RemoveNumbers,
    RemoveNumberWords,
    RemoveTimeWords,
    RemoveUnboundPunct,
    RemoveUrls,
    RemoveWhitespace,
}

impl Transform {
    /// Every transform, in alphabetical order of name.
    pub const ALL: [Transform; 12] = [
        Transform::ConvertHtmlEntities,
        Transform::ConvertLigatures,
        Transform::CorrectSpelling,
        Transform::KeywordTokenize,
        Transform::Lowercase,
        Transform::RemoveEscChars,
        Transform::RemoveNumbers,
        Transform::RemoveNumberWords,
        Transform::RemoveTimeWords,
        Transform::RemoveUnboundPunct,
        Transform::RemoveUrls,
        Transform::RemoveWhitespace,
    ];

    /// The snake_case name of this transform.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::ConvertHtmlEntities => "convert_html_entities",
            Transform::ConvertLigatures => "convert_ligatures",
            Transform::CorrectSpelling => "correct_spelling",
            Transform::KeywordTokenize => "keyword_tokenize",
            Transform::Lowercase => "lowercase",
            Transform::RemoveEscChars => "remove_esc_chars",
            Transform::RemoveNumbers => "remove_numbers",
            Transform::RemoveNumberWords => "remove_number_words",
            Transform::RemoveTimeWords => "remove_time_words",
            Transform::RemoveUnboundPunct => "remove_unbound_punct",
            Transform::RemoveUrls => "remove_urls",
            Transform::RemoveWhitespace => "remove_whitespace",
        }
    }

    /// Whether this transform needs a spelling corrector.
    pub fn needs_corrector(&self) -> bool {
        matches!(self, Transform::CorrectSpelling)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = PreprocessingError;

    fn from_str(s: &str) -> Result<Self> {
        Transform::ALL
            .into_iter()
            .find(|transform| transform.name() == s)
            .ok_or_else(|| PreprocessingError::function(format!("unknown transform: {s}")))
    }
}

/// An ordered list of transforms applied as a left fold.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    transforms: Vec<Transform>,
    corrector: Option<Arc<SpellingCorrector>>,
    ligatures: Option<Arc<MappingCharFilter>>,
}

impl Pipeline {
    /// Create a pipeline applying `transforms` in order.
    pub fn new(transforms: Vec<Transform>) -> Self {
        Pipeline {
            transforms,
            corrector: None,
            ligatures: None,
        }
    }

    /// Create a pipeline from transform names.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let transforms = names
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Transform>>>()?;
        Ok(Self::new(transforms))
    }

    /// Use `corrector` for [`Transform::CorrectSpelling`].
    pub fn with_corrector(mut self, corrector: Arc<SpellingCorrector>) -> Self {
        self.corrector = Some(corrector);
        self
    }

    /// Use a custom ligature table for [`Transform::ConvertLigatures`].
    pub fn with_ligatures(mut self, ligatures: Arc<MappingCharFilter>) -> Self {
        self.ligatures = Some(ligatures);
        self
    }

    /// The transforms of this pipeline, in application order.
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Apply every transform in order.
    ///
    /// Empty or absent input returns an empty string. A
    /// [`Transform::CorrectSpelling`] step without a corrector fails with
    /// [`PreprocessingError::Function`] before any text is touched.
    pub fn apply<'t>(&self, text: impl Into<Option<&'t str>>) -> Result<String> {
        if self.corrector.is_none()
            && let Some(transform) = self.transforms.iter().find(|t| t.needs_corrector())
        {
            return Err(PreprocessingError::function(format!(
                "{transform} requires a spelling corrector"
            )));
        }

        let Some(text) = text.into().filter(|text| !text.is_empty()) else {
            return Ok(String::new());
        };

        let mut current = text.to_string();
        for transform in &self.transforms {
            current = self.apply_one(*transform, &current)?;
            debug!("{transform}: {} bytes", current.len());
        }

        Ok(current)
    }

    fn apply_one(&self, transform: Transform, text: &str) -> Result<String> {
        Ok(match transform {
            Transform::ConvertHtmlEntities => text::convert_html_entities(text),
            Transform::ConvertLigatures => match &self.ligatures {
                Some(ligatures) => text::convert_ligatures_with(text, ligatures),
                None => text::convert_ligatures(text),
            },
            Transform::CorrectSpelling => match &self.corrector {
                Some(corrector) => text::correct_spelling(text, corrector),
                None => {
                    return Err(PreprocessingError::function(
                        "correct_spelling requires a spelling corrector",
                    ));
                }
            },
            Transform::KeywordTokenize => text::keyword_tokenize(text)?,
            Transform::Lowercase => text::lowercase(text),
            Transform::RemoveEscChars => text::remove_esc_chars(text),
            Transform::RemoveNumbers => text::remove_numbers(text),
            Transform::RemoveNumberWords => text::remove_number_words(text),
            Transform::RemoveTimeWords => text::remove_time_words(text),
            Transform::RemoveUnboundPunct => text::remove_unbound_punct(text),
            Transform::RemoveUrls => text::remove_urls(text),
            Transform::RemoveWhitespace => text::remove_whitespace(text),
        })
    }
}

/// Apply `transforms` to `text` in order.
pub fn preprocess_text<'t>(
    text: impl Into<Option<&'t str>>,
    transforms: &[Transform],
) -> Result<String> {
    Pipeline::new(transforms.to_vec()).apply(text)
}
