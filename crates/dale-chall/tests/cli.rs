//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

const SAMPLE: &str = "The cat sat on the mat.\nZebras graze quietly today.\n";
const EASY_WORDS: &str = "the\ncat\nsat\non\nmat\nzebra\n";

/// A temp dir holding `input.txt` and the default easy-word list.
fn workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), SAMPLE).unwrap();
    fs::write(tmp.path().join("DaleChallEasyWordList.txt"), EASY_WORDS).unwrap();
    tmp
}

/// Run `args` from `dir` with `--json` and parse stdout.
fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = cmd()
        .arg("-C")
        .arg(dir)
        .args(args)
        .arg("--json")
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("dcf"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_mode_shows_error() {
    cmd()
        .args(["XYZ", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let tmp = TempDir::new().unwrap();
    let json = run_json(tmp.path(), &["info"]);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["config"]["partitions"], 20);
}

// =============================================================================
// Analysis modes
// =============================================================================

#[test]
fn sen_counts_lines() {
    let tmp = workspace();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["SEN", "input.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of sentences: 2"));
}

#[test]
fn wrd_counts_tokens() {
    let tmp = workspace();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["wrd", "input.txt", "--N", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of words: 10"));
}

#[test]
fn unq_counts_normalized_words() {
    let tmp = workspace();
    // "The" and "the" collapse; 9 distinct words remain
    let json = run_json(tmp.path(), &["UNQ", "input.txt"]);
    assert_eq!(json["unique_words"], 9);
}

#[test]
fn top20_lists_most_frequent_first() {
    let tmp = workspace();
    let json = run_json(tmp.path(), &["TOP20", "input.txt", "--master", "local[2]"]);
    let words = json["words"].as_array().unwrap();
    assert_eq!(words.len(), 9);
    assert_eq!(words[0]["word"], "the");
    assert_eq!(words[0]["count"], 2);
}

#[test]
fn top_respects_count_flag() {
    let tmp = workspace();
    let json = run_json(tmp.path(), &["top", "input.txt", "--count", "3"]);
    assert_eq!(json["words"].as_array().unwrap().len(), 3);
}

#[test]
fn dff_counts_difficult_words() {
    let tmp = workspace();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["DFF", "input.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of difficult words: 3"));
}

#[test]
fn dff_uses_explicit_word_list() {
    let tmp = workspace();
    fs::write(tmp.path().join("none.txt"), "").unwrap();
    let json = run_json(
        tmp.path(),
        &["dff", "input.txt", "--simple_words", "none.txt"],
    );
    assert_eq!(json["difficult_words"], 10);
}

#[test]
#[allow(clippy::float_cmp, clippy::suboptimal_flops)]
fn dcf_matches_formula() {
    let tmp = workspace();
    let json = run_json(tmp.path(), &["DCF", "input.txt", "--N", "4"]);
    let expected = 0.1579 * (3.0 / 10.0 * 100.0) + 0.0496 * (10.0 / 2.0);
    assert_eq!(json["score"].as_f64().unwrap(), expected);
    assert_eq!(json["sentences"], 2);
    assert_eq!(json["words"], 10);
    assert_eq!(json["difficult_words"], 3);
    assert!(json["elapsed_secs"].as_f64().unwrap() >= 0.0);
}

#[test]
fn dcf_text_output_reports_time() {
    let tmp = workspace();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["--color", "never", "dcf", "input.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dale-Chall score: 4.98"))
        .stdout(predicate::str::contains("Total execution time:"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_input_fails() {
    let tmp = workspace();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["SEN", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn missing_word_list_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), SAMPLE).unwrap();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["DFF", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DaleChallEasyWordList.txt"));
}

#[test]
fn dcf_checks_word_list_before_reading_input() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["DCF", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DaleChallEasyWordList.txt"))
        .stderr(predicate::str::contains("missing.txt").not());
}

#[test]
fn invalid_utf8_input_is_still_counted() {
    let tmp = workspace();
    fs::write(tmp.path().join("bad.txt"), b"\xff\xfe abc\n").unwrap();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["WRD", "bad.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of words: 2"));
}

#[test]
fn empty_input_cannot_be_scored() {
    let tmp = workspace();
    fs::write(tmp.path().join("empty.txt"), "").unwrap();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["DCF", "empty.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no scorable text"));
}

#[test]
fn invalid_master_fails() {
    let tmp = workspace();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["SEN", "input.txt", "--master", "spark://host:7077"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid master address"));
}

#[test]
fn zero_partitions_fails() {
    let tmp = workspace();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["UNQ", "input.txt", "-N", "0"])
        .assert()
        .failure();
}

#[test]
fn oversized_input_rejected_by_config_limit() {
    let tmp = workspace();
    fs::write(tmp.path().join("dale-chall.toml"), "max_input_bytes = 8\n").unwrap();
    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["WRD", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}
