//! Error types for dale-chall-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the execution context and its datasets.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The master address could not be parsed.
    #[error("invalid master address: {0:?}. Use local, local[N] or local[*]")]
    InvalidMaster(String),

    /// A partition count of zero was requested.
    #[error("partition count must be at least 1")]
    ZeroPartitions,

    /// The worker thread pool could not be started.
    #[error("failed to start worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    /// An input file could not be read.
    #[error("failed to read {path}")]
    Read {
        /// The file that failed to read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An input file exceeds the configured size limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// The offending file.
        path: Utf8PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },
}

/// Result type alias using [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input has no words or no sentences, so the formula is undefined.
    #[error("no scorable text in input ({words} words, {sentences} sentences)")]
    EmptyInput {
        /// Word count that was supplied.
        words: u64,
        /// Sentence count that was supplied.
        sentences: u64,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
