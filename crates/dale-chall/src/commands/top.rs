//! Top-words command (`TOP20`).

use clap::Args;
use dale_chall_core::Config;
use dale_chall_core::aggregate;
use dale_chall_core::reports::TopWordsReport;
use owo_colors::{OwoColorize, Stream::Stdout};
use tracing::{debug, instrument};

use super::{InputArgs, read_lines, run_in_context};

/// Arguments for the `top` subcommand.
#[derive(Args, Debug)]
pub struct TopArgs {
    /// Input file and run settings.
    #[command(flatten)]
    pub input: InputArgs,

    /// How many words to list [default: 20]
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,
}

/// List the most frequent normalized words in a file.
#[instrument(name = "cmd_top", skip_all, fields(file = %args.input.input))]
pub fn cmd_top(args: TopArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let settings = args.input.resolve(config)?;
    let n = args.count.unwrap_or_else(|| config.top_count_or_default());
    debug!(?settings, n, "executing top words");

    let top = run_in_context(settings.master, |ctx| {
        let lines = read_lines(ctx, &args.input.input, &settings)?;
        let counts = aggregate::compute_counts(lines, settings.partitions)?;
        Ok(aggregate::top_words(counts, n))
    })?;
    let report = TopWordsReport::new(top);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let width = report
            .words
            .iter()
            .map(|w| w.word.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &report.words {
            let word = format!("{:<width$}", entry.word);
            println!(
                "{}  {}",
                word.if_supports_color(Stdout, |w| w.bold()),
                entry.count
            );
        }
    }
    Ok(())
}
