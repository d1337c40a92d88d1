//! Difficult-word count (`DFF`).

use dale_chall_core::Config;
use dale_chall_core::aggregate;
use dale_chall_core::reports::DifficultReport;
use tracing::{debug, instrument};

use super::{WordListArgs, read_lines, read_word_list, run_in_context};

/// Count the words in a file that have no match in the easy-word list.
#[instrument(name = "cmd_difficult", skip_all, fields(file = %args.input.input))]
pub fn cmd_difficult(args: WordListArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let settings = args.input.resolve(config)?;
    let simple_words = args.simple_words(config);
    debug!(?settings, %simple_words, "executing difficult word count");

    let easy = read_word_list(&simple_words)?;
    let difficult_words = run_in_context(settings.master, |ctx| {
        let lines = read_lines(ctx, &args.input.input, &settings)?;
        let counts = aggregate::compute_counts(lines, settings.partitions)?;
        Ok(aggregate::count_difficult_words(counts, &easy))
    })?;
    let report = DifficultReport { difficult_words };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Number of difficult words: {}", report.difficult_words);
    }
    Ok(())
}
