//! Word normalization.
//!
//! Every word is lowercased and stripped of leading and trailing
//! non-alphabetic characters before it is counted or matched. Interior
//! characters are kept, so `"haven't"` stays `"haven't"`.

/// Convert a string to lowercase (Unicode-aware).
pub fn to_lower_case(s: &str) -> String {
    s.to_lowercase()
}

/// Remove non-alphabetic characters from both ends of a string.
///
/// Stops at the first alphabetic character on each side, so `",1what?!\""`
/// becomes `"what"` and `"!!@#"` becomes `""`.
pub fn strip_non_alpha(s: &str) -> &str {
    s.trim_matches(|c: char| !c.is_alphabetic())
}

/// Lowercase a word and strip its non-alphabetic ends.
pub fn normalize(s: &str) -> String {
    strip_non_alpha(&to_lower_case(s)).to_string()
}
