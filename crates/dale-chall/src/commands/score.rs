//! Dale-Chall score command (`DCF`).

use std::time::{Duration, Instant};

use anyhow::Context;
use dale_chall_core::aggregate;
use dale_chall_core::{Config, DaleChallReport};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::{WordListArgs, read_lines, read_word_list, run_in_context};

#[derive(Serialize)]
struct ScoreOutput {
    #[serde(flatten)]
    report: DaleChallReport,
    elapsed_secs: f64,
}

/// Spinner on stderr; indicatif hides it when stderr is not a terminal.
fn spinner(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Compute the Dale-Chall readability score of a file and report the time taken.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.input.input))]
pub fn cmd_score(
    args: WordListArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let settings = args.input.resolve(config)?;
    let simple_words = args.simple_words(config);
    debug!(?settings, %simple_words, "executing Dale-Chall score");

    let easy = read_word_list(&simple_words)?;
    let progress = spinner(global_json || quiet);
    let result = run_in_context(settings.master, |ctx| {
        progress.set_message("reading input");
        let lines = read_lines(ctx, &args.input.input, &settings)?;

        progress.set_message("counting sentences and words");
        let sentences = aggregate::count_sentences(&lines);
        let words = aggregate::count_words(lines.clone());

        progress.set_message("counting word frequencies");
        let counts = aggregate::compute_counts(lines, settings.partitions)?;

        progress.set_message("finding difficult words");
        let difficult = aggregate::count_difficult_words(counts, &easy);

        DaleChallReport::new(sentences, words, difficult)
            .with_context(|| format!("cannot score {}", args.input.input))
    });
    progress.finish_and_clear();
    let report = result?;
    let elapsed = start.elapsed().as_secs_f64();

    info!(
        score = report.score,
        sentences = report.sentences,
        words = report.words,
        difficult = report.difficult_words,
        elapsed_secs = elapsed,
        "Dale-Chall score computed"
    );

    if global_json {
        let output = ScoreOutput {
            report,
            elapsed_secs: elapsed,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Dale-Chall score: {}",
            report.score.if_supports_color(Stdout, |s| s.green())
        );
        println!("Total execution time: {elapsed}sec");
    }
    Ok(())
}
