//! Single-character edit generation.
//!
//! An edit is one deletion, one adjacent transposition, one substitution or
//! one insertion, with substituted and inserted characters drawn from the
//! lowercase ASCII alphabet. Words are handled as sequences of Unicode
//! scalar values, so multi-byte characters are never split.

use ahash::AHashSet;

/// Characters used for substitutions and insertions.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Number of one-edit strings generated for a word of `len` characters,
/// before deduplication.
///
/// `len` deletions, `len - 1` transpositions, `26 * len` substitutions and
/// `26 * (len + 1)` insertions.
pub fn one_edit_count(len: usize) -> usize {
    len + len.saturating_sub(1) + ALPHABET.len() * len + ALPHABET.len() * (len + 1)
}

/// Generate every string reachable from `word` by one edit, deduplicated.
pub fn one_edit(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = AHashSet::with_capacity(one_edit_count(chars.len()));
    for_each_one_edit(&chars, |edit| {
        edits.insert(edit);
    });
    edits
}

/// Generate every string one edit away from each one-edit neighbour of
/// `word`.
///
/// The sequence is produced lazily and is not deduplicated; it also yields
/// strings at distance 0 or 1 from `word`.
pub fn two_edit(word: &str) -> impl Iterator<Item = String> + use<> {
    one_edit(word)
        .into_iter()
        .flat_map(|first| one_edit(&first).into_iter())
}

/// Calls `emit` once per generated edit, in deletion, transposition,
/// substitution, insertion order.
fn for_each_one_edit<F: FnMut(String)>(chars: &[char], mut emit: F) {
    let len = chars.len();

    // Deletions
    for i in 0..len {
        emit(splice(&chars[..i], &[], &chars[i + 1..]));
    }

    // Transpositions
    for i in 0..len.saturating_sub(1) {
        emit(splice(&chars[..i], &[chars[i + 1], chars[i]], &chars[i + 2..]));
    }

    // Substitutions
    for i in 0..len {
        for &ch in &ALPHABET {
            emit(splice(&chars[..i], &[ch], &chars[i + 1..]));
        }
    }

    // Insertions
    for i in 0..=len {
        for &ch in &ALPHABET {
            emit(splice(&chars[..i], &[ch], &chars[i..]));
        }
    }
}

fn splice(left: &[char], middle: &[char], right: &[char]) -> String {
    let mut edit = String::with_capacity((left.len() + middle.len() + right.len()) * 4);
    edit.extend(left);
    edit.extend(middle);
    edit.extend(right);
    edit
}
