//! Serializable results for the counting modes.
//!
//! The Dale-Chall score has its own report in [`crate::formula`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate::WordCount;

/// Number of sentences in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceReport {
    /// Sentence (line) count.
    pub sentences: u64,
}

/// Number of whitespace-separated words in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordReport {
    /// Word count.
    pub words: u64,
}

/// Number of distinct normalized words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UniqueReport {
    /// Distinct word count.
    pub unique_words: u64,
}

/// A word and its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordFrequency {
    /// Normalized word.
    pub word: String,
    /// Occurrences.
    pub count: u64,
}

impl From<WordCount> for WordFrequency {
    fn from((word, count): WordCount) -> Self {
        Self { word, count }
    }
}

/// Most frequent words, highest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TopWordsReport {
    /// Words in descending frequency.
    pub words: Vec<WordFrequency>,
}

impl TopWordsReport {
    /// Build a report from `(word, count)` pairs already in order.
    pub fn new(top: Vec<WordCount>) -> Self {
        Self {
            words: top.into_iter().map(WordFrequency::from).collect(),
        }
    }
}

/// Number of difficult words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DifficultReport {
    /// Total occurrences of words not matched by the easy-word list.
    pub difficult_words: u64,
}
