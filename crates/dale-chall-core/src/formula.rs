//! Dale-Chall readability formula.
//!
//! Formula: `0.1579 * (difficult / words * 100) + 0.0496 * (words / sentences)`
//!
//! Higher scores mean harder text. Roughly: below 5 is easy for a fourth
//! grader, 9 and above reads at college level.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Weight of the difficult-word percentage.
pub const DIFFICULT_WEIGHT: f64 = 0.1579;

/// Weight of the average sentence length.
pub const SENTENCE_WEIGHT: f64 = 0.0496;

/// Result of Dale-Chall scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DaleChallReport {
    /// Dale-Chall score.
    pub score: f64,
    /// Number of sentences (input lines).
    pub sentences: u64,
    /// Number of whitespace-separated words.
    pub words: u64,
    /// Number of difficult words.
    pub difficult_words: u64,
    /// Difficult words as a percentage of all words.
    pub percent_difficult: f64,
    /// Average words per sentence.
    pub average_sentence_length: f64,
}

impl DaleChallReport {
    /// Score a text from its sentence, word and difficult-word counts.
    ///
    /// Returns [`AnalysisError::EmptyInput`] when there are no words or no
    /// sentences.
    #[allow(clippy::suboptimal_flops)]
    pub fn new(sentences: u64, words: u64, difficult_words: u64) -> AnalysisResult<Self> {
        if words == 0 || sentences == 0 {
            return Err(AnalysisError::EmptyInput { words, sentences });
        }
        let percent_difficult = difficult_words as f64 / words as f64 * 100.0;
        let average_sentence_length = words as f64 / sentences as f64;
        let score = DIFFICULT_WEIGHT * percent_difficult + SENTENCE_WEIGHT * average_sentence_length;

        Ok(Self {
            score,
            sentences,
            words,
            difficult_words,
            percent_difficult,
            average_sentence_length,
        })
    }
}

/// Compute the Dale-Chall score.
pub fn dale_chall_score(sentences: u64, words: u64, difficult_words: u64) -> AnalysisResult<f64> {
    DaleChallReport::new(sentences, words, difficult_words).map(|r| r.score)
}
