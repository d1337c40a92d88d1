//! Word-count aggregation over partitioned datasets.
//!
//! Lines flow through `flat_map` (whitespace split), `map` (normalize) and
//! `reduce_by_key` (sum). The resulting `(word, count)` dataset feeds the
//! unique-word, top-words and difficult-word statistics.

use crate::engine::Dataset;
use crate::error::EngineResult;
use crate::inflection::find_match;
use crate::normalize::normalize;
use crate::word_list::EasyWordList;

/// A normalized word and how many times it occurs.
pub type WordCount = (String, u64);

/// Count the sentences in a dataset of lines (one sentence per line).
pub fn count_sentences(lines: &Dataset<'_, String>) -> u64 {
    lines.count() as u64
}

/// Count the whitespace-separated tokens across all lines.
#[tracing::instrument(skip_all, fields(partitions = lines.num_partitions()))]
pub fn count_words(lines: Dataset<'_, String>) -> u64 {
    lines
        .map(|line| line.split_whitespace().count() as u64)
        .sum()
}

/// Count occurrences of each normalized word.
///
/// Tokens are lowercased and stripped of non-alphabetic ends before
/// grouping. The result has `partitions` partitions; the counts do not
/// depend on it.
#[tracing::instrument(skip(lines))]
pub fn compute_counts<'ctx>(
    lines: Dataset<'ctx, String>,
    partitions: usize,
) -> EngineResult<Dataset<'ctx, WordCount>> {
    lines
        .flat_map(|line| {
            line.split_whitespace()
                .map(|token| (normalize(token), 1u64))
                .collect::<Vec<_>>()
        })
        .reduce_by_key(|a, b| a + b, partitions)
}

/// Number of distinct normalized words.
pub fn count_unique(counts: &Dataset<'_, WordCount>) -> u64 {
    counts.count() as u64
}

/// The `n` most frequent words, highest count first.
///
/// Ties are ordered alphabetically so the output is stable across runs and
/// partition counts.
#[tracing::instrument(skip(counts))]
pub fn top_words(counts: Dataset<'_, WordCount>, n: usize) -> Vec<WordCount> {
    counts
        .sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .take(n)
}

/// Total occurrences of words with no inflection match in `easy`.
#[tracing::instrument(skip_all, fields(easy_words = easy.len()))]
pub fn count_difficult_words(counts: Dataset<'_, WordCount>, easy: &EasyWordList) -> u64 {
    counts
        .filter(|(word, _)| find_match(word, easy.words()).is_none())
        .map(|(_, count)| count)
        .sum()
}
