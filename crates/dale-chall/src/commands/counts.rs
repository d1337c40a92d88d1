//! Sentence, word and unique-word counts (`SEN`, `WRD`, `UNQ`).

use dale_chall_core::Config;
use dale_chall_core::aggregate;
use dale_chall_core::reports::{SentenceReport, UniqueReport, WordReport};
use tracing::{debug, instrument};

use super::{InputArgs, read_lines, run_in_context};

/// Count the sentences (lines) in a file.
#[instrument(name = "cmd_sentences", skip_all, fields(file = %args.input))]
pub fn cmd_sentences(args: InputArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let settings = args.resolve(config)?;
    debug!(?settings, "executing sentence count");

    let sentences = run_in_context(settings.master, |ctx| {
        let lines = read_lines(ctx, &args.input, &settings)?;
        Ok(aggregate::count_sentences(&lines))
    })?;
    let report = SentenceReport { sentences };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Number of sentences: {}", report.sentences);
    }
    Ok(())
}

/// Count the whitespace-separated words in a file.
#[instrument(name = "cmd_words", skip_all, fields(file = %args.input))]
pub fn cmd_words(args: InputArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let settings = args.resolve(config)?;
    debug!(?settings, "executing word count");

    let words = run_in_context(settings.master, |ctx| {
        let lines = read_lines(ctx, &args.input, &settings)?;
        Ok(aggregate::count_words(lines))
    })?;
    let report = WordReport { words };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Number of words: {}", report.words);
    }
    Ok(())
}

/// Count the distinct normalized words in a file.
#[instrument(name = "cmd_unique", skip_all, fields(file = %args.input))]
pub fn cmd_unique(args: InputArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let settings = args.resolve(config)?;
    debug!(?settings, "executing unique word count");

    let unique_words = run_in_context(settings.master, |ctx| {
        let lines = read_lines(ctx, &args.input, &settings)?;
        let counts = aggregate::compute_counts(lines, settings.partitions)?;
        Ok(aggregate::count_unique(&counts))
    })?;
    let report = UniqueReport { unique_words };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Number of unique words: {}", report.unique_words);
    }
    Ok(())
}
