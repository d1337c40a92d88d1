//! Library interface for the `dale-chall` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a
//! library, primarily for documentation generation and testing. The actual
//! entry point is in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands, one per analysis mode
//! - [`commands`] - Command implementations

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                  Log filter (e.g., debug, dale_chall_core=trace)
    DALE_CHALL_LOG_PATH       Explicit log file path
    DALE_CHALL_LOG_DIR        Log directory
    DALE_CHALL_PARTITIONS     Default partition count
    DALE_CHALL_MASTER         Default execution context (local, local[N], local[*])
    DALE_CHALL_SIMPLE_WORDS   Default easy-word list file
";

/// Command-line interface definition for dale-chall.
#[derive(Parser)]
#[command(name = "dale-chall")]
#[command(about = "Text analysis via the Dale-Chall readability formula", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The analysis mode to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available analysis modes.
#[derive(Subcommand)]
pub enum Commands {
    /// Count sentences (one per line)
    #[command(alias = "SEN")]
    Sen(commands::InputArgs),

    /// Count whitespace-separated words
    #[command(alias = "WRD")]
    Wrd(commands::InputArgs),

    /// Count distinct normalized words
    #[command(alias = "UNQ")]
    Unq(commands::InputArgs),

    /// List the most frequent words
    #[command(alias = "TOP20")]
    Top(commands::top::TopArgs),

    /// Count words missing from the easy-word list
    #[command(alias = "DFF")]
    Dff(commands::WordListArgs),

    /// Compute the Dale-Chall readability score
    #[command(alias = "DCF")]
    Dcf(commands::WordListArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn uppercase_mode_aliases_parse() {
        let cli = Cli::try_parse_from(["dale-chall", "DCF", "book.txt", "--N", "4"]).unwrap();
        match cli.command {
            Some(Commands::Dcf(args)) => {
                assert_eq!(args.input.input, "book.txt");
                assert_eq!(args.input.partitions, Some(4));
            }
            _ => panic!("expected the dcf command"),
        }
    }

    #[test]
    fn top20_alias_parses() {
        let cli = Cli::try_parse_from(["dale-chall", "TOP20", "book.txt"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Top(_))));
    }

    #[test]
    fn simple_words_underscore_alias_parses() {
        let cli = Cli::try_parse_from([
            "dale-chall",
            "dff",
            "book.txt",
            "--simple_words",
            "easy.txt",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Dff(args)) => {
                assert_eq!(args.simple_words.as_deref().map(|p| p.as_str()), Some("easy.txt"));
            }
            _ => panic!("expected the dff command"),
        }
    }
}
