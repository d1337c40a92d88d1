//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use dale_chall_core::{Config, Dataset, EasyWordList, ExecutionContext, Master};

pub mod counts;
pub mod difficult;
pub mod info;
pub mod score;
pub mod top;

/// Input file and execution settings shared by every analysis mode.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Text file to process; each line is one sentence.
    pub input: Utf8PathBuf,

    /// Number of partitions for word-count datasets [default: 20]
    #[arg(short = 'N', long, alias = "N", value_name = "N")]
    pub partitions: Option<usize>,

    /// Execution context: local, local[N] or local[*] [default: local[*]]
    #[arg(long, value_name = "MASTER")]
    pub master: Option<String>,
}

/// [`InputArgs`] plus the easy-word list, for modes that need it.
#[derive(Args, Debug)]
pub struct WordListArgs {
    /// Input file and run settings.
    #[command(flatten)]
    pub input: InputArgs,

    /// Easy-word list, one word per line [default: DaleChallEasyWordList.txt]
    #[arg(long, alias = "simple_words", value_name = "FILE")]
    pub simple_words: Option<Utf8PathBuf>,
}

impl WordListArgs {
    /// Easy-word list path from the flag, falling back to config.
    pub fn simple_words(&self, config: &Config) -> Utf8PathBuf {
        self.simple_words
            .clone()
            .unwrap_or_else(|| config.simple_words_or_default())
    }
}

/// Execution settings after merging CLI flags over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// Partition count for datasets.
    pub partitions: usize,
    /// Execution context address.
    pub master: Master,
    /// Input size limit in bytes.
    pub max_input_bytes: Option<u64>,
}

impl InputArgs {
    /// Merge CLI flags over config values.
    pub fn resolve(&self, config: &Config) -> anyhow::Result<RunSettings> {
        let partitions = self
            .partitions
            .unwrap_or_else(|| config.partitions_or_default());
        if partitions == 0 {
            anyhow::bail!("--partitions must be at least 1");
        }
        let master_str = self
            .master
            .as_deref()
            .unwrap_or_else(|| config.master_or_default());
        let master: Master = master_str.parse()?;
        Ok(RunSettings {
            partitions,
            master,
            max_input_bytes: config.input_limit(),
        })
    }
}

/// Start an execution context, run `f` on it, and stop it again.
///
/// The context is stopped whether or not `f` succeeds.
pub fn run_in_context<R>(
    master: Master,
    f: impl FnOnce(&ExecutionContext) -> anyhow::Result<R>,
) -> anyhow::Result<R> {
    let ctx = ExecutionContext::new(master)
        .with_context(|| format!("failed to start execution context {master}"))?;
    let result = f(&ctx);
    ctx.stop();
    result
}

/// Read the input file into a dataset of lines.
pub fn read_lines<'ctx>(
    ctx: &'ctx ExecutionContext,
    path: &Utf8Path,
    settings: &RunSettings,
) -> anyhow::Result<Dataset<'ctx, String>> {
    ctx.text_file(path, settings.partitions, settings.max_input_bytes)
        .with_context(|| format!("failed to load {path}"))
}

/// Read the easy-word list.
pub fn read_word_list(path: &Utf8Path) -> anyhow::Result<EasyWordList> {
    EasyWordList::from_file(path).with_context(|| format!("failed to load easy-word list {path}"))
}
