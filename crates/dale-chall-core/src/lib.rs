//! Core library for dale-chall.
//!
//! Computes Dale-Chall readability statistics over a text where each line is
//! one sentence. Word counting runs as a partitioned map-reduce on an
//! explicitly created [`ExecutionContext`]; normalization and inflection
//! matching are plain functions that need no context.
//!
//! # Modules
//!
//! - [`normalize`] - Lowercasing and stripping of non-alphabetic word ends
//! - [`inflection`] - Matching words against the easy-word list
//! - [`word_list`] - Loading the easy-word list
//! - [`engine`] - Execution context and partitioned datasets
//! - [`aggregate`] - Sentence, word, unique, top and difficult-word counts
//! - [`formula`] - The Dale-Chall score
//! - [`reports`] - Serializable results for the counting modes
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use dale_chall_core::{DaleChallReport, EasyWordList, ExecutionContext, Master, aggregate};
//!
//! let ctx = ExecutionContext::new(Master::Local(4)).unwrap();
//! let lines = ctx.text_file(Utf8Path::new("book.txt"), 8, None).unwrap();
//! let easy = EasyWordList::from_file(Utf8Path::new("DaleChallEasyWordList.txt")).unwrap();
//!
//! let sentences = aggregate::count_sentences(&lines);
//! let words = aggregate::count_words(lines.clone());
//! let counts = aggregate::compute_counts(lines, 8).unwrap();
//! let difficult = aggregate::count_difficult_words(counts, &easy);
//!
//! let report = DaleChallReport::new(sentences, words, difficult).unwrap();
//! println!("{:.2}", report.score);
//! ctx.stop();
//! ```
#![deny(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod formula;
pub mod inflection;
pub mod normalize;
pub mod reports;
pub mod word_list;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use engine::{Dataset, ExecutionContext, Master};
pub use error::{AnalysisError, ConfigError, ConfigResult, EngineError, EngineResult};
pub use formula::DaleChallReport;
pub use word_list::EasyWordList;
