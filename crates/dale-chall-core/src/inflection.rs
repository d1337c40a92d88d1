//! Inflection matching against the easy-word list.
//!
//! Two words are "the same" when, after normalization, one equals the other
//! or equals the other plus a common English ending. Any matching ending is
//! enough; endings have no priority among themselves.

use crate::normalize::normalize;

/// Endings that turn a base word into one of its inflections.
pub const INFLECTION_SUFFIXES: &[&str] = &["'s", "s", "es", "ing", "ed", "d"];

/// Returns `true` if `a` is `b` or a common inflection of `b`.
///
/// Both words are lowercased and stripped of non-alphabetic ends first.
pub fn is_inflection_of(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    is_normalized_inflection_of(&a, &b)
}

/// [`is_inflection_of`] for words that are already normalized.
fn is_normalized_inflection_of(a: &str, b: &str) -> bool {
    a == b
        || a.strip_prefix(b)
            .is_some_and(|rest| INFLECTION_SUFFIXES.contains(&rest))
}

/// Returns `true` if either word is an inflection of the other.
pub fn same(a: &str, b: &str) -> bool {
    is_inflection_of(a, b) || is_inflection_of(b, a)
}

/// Find the first entry of `list` that is [`same`] as `word`.
///
/// Returns `None` when `word` is empty, `list` is empty, or nothing matches.
pub fn find_match<'a, S: AsRef<str>>(word: &str, list: &'a [S]) -> Option<&'a str> {
    if word.is_empty() || list.is_empty() {
        return None;
    }
    let word = normalize(word);
    for entry in list {
        let entry: &str = entry.as_ref();
        let candidate = normalize(entry);
        if is_normalized_inflection_of(&word, &candidate)
            || is_normalized_inflection_of(&candidate, &word)
        {
            return Some(entry);
        }
    }
    None
}
