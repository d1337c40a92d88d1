//! Easy-word list loading.
//!
//! The list is a plain text file with one word per line. Order is kept
//! because [`crate::inflection::find_match`] returns the first match.

use camino::Utf8Path;

use crate::error::{EngineError, EngineResult};

/// An ordered list of reference words considered "easy".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EasyWordList {
    words: Vec<String>,
}

impl EasyWordList {
    /// Build a list from in-memory words, trimming surrounding whitespace.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Parse a list from file contents, one word per line.
    pub fn parse(content: &str) -> Self {
        Self::new(content.lines())
    }

    /// Read a list from a file.
    #[tracing::instrument(fields(path = %path))]
    pub fn from_file(path: &Utf8Path) -> EngineResult<Self> {
        let content =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| EngineError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let list = Self::parse(&content);
        tracing::debug!(words = list.len(), "loaded easy-word list");
        Ok(list)
    }

    /// The words in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no entries.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
