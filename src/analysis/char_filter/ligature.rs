//! Ligature tables for [`MappingCharFilter`].
//!
//! A ligature file is a JSON object keyed by position, each entry naming a
//! ligature and the letters it expands to:
//!
//! ```json
//! {"0": {"ligature": "æ", "term": "ae"}, "1": {"ligature": "ﬁ", "term": "fi"}}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::mapping::MappingCharFilter;
use crate::error::{PreprocessingError, Result};

/// Built-in ligatures and the letters they expand to.
pub const DEFAULT_LIGATURES: &[(&str, &str)] = &[
    ("Ꜳ", "AA"),
    ("ꜳ", "aa"),
    ("Æ", "AE"),
    ("æ", "ae"),
    ("Ꜵ", "AO"),
    ("ꜵ", "ao"),
    ("Ꜷ", "AU"),
    ("ꜷ", "au"),
    ("Ꜹ", "AV"),
    ("ꜹ", "av"),
    ("Ꜽ", "AY"),
    ("ꜽ", "ay"),
    ("Ǆ", "DZ"),
    ("ǅ", "Dz"),
    ("ǆ", "dz"),
    ("ﬀ", "ff"),
    ("ﬃ", "ffi"),
    ("ﬄ", "ffl"),
    ("ﬁ", "fi"),
    ("ﬂ", "fl"),
    ("Ĳ", "IJ"),
    ("ĳ", "ij"),
    ("Ǉ", "LJ"),
    ("ǈ", "Lj"),
    ("ǉ", "lj"),
    ("Ǌ", "NJ"),
    ("ǋ", "Nj"),
    ("ǌ", "nj"),
    ("Œ", "OE"),
    ("œ", "oe"),
    ("Ꝏ", "OO"),
    ("ꝏ", "oo"),
    ("ẞ", "SS"),
    ("ß", "ss"),
    ("ﬆ", "st"),
    ("ﬅ", "ft"),
    ("ᵫ", "ue"),
    ("Ꝡ", "VY"),
    ("ꝡ", "vy"),
];

#[derive(Debug, Deserialize)]
struct LigatureEntry {
    ligature: String,
    term: String,
}

/// Create a filter expanding the built-in ligatures.
pub fn default_filter() -> Result<MappingCharFilter> {
    MappingCharFilter::new(DEFAULT_LIGATURES.iter().copied())
}

/// Parse a ligature table from its JSON text.
///
/// Entries are returned in ascending order of their numeric keys.
pub fn parse_table(json: &str) -> Result<Vec<(String, String)>> {
    let raw: BTreeMap<String, LigatureEntry> = serde_json::from_str(json)?;

    let mut indexed = Vec::with_capacity(raw.len());
    for (key, entry) in raw {
        let index: usize = key.parse().map_err(|_| {
            PreprocessingError::config(format!("ligature table key {key:?} is not an index"))
        })?;
        indexed.push((index, entry));
    }
    indexed.sort_by_key(|(index, _)| *index);

    Ok(indexed
        .into_iter()
        .map(|(_, entry)| (entry.ligature, entry.term))
        .collect())
}

/// Load a ligature table file and build a filter from it.
pub fn load_filter<P: AsRef<Path>>(path: P) -> Result<MappingCharFilter> {
    let path = path.as_ref();
    let table = parse_table(&fs::read_to_string(path)?)?;
    info!(
        "Loaded {} ligatures from {}",
        table.len(),
        path.display()
    );
    MappingCharFilter::new(table)
}
