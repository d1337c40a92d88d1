//! Logging setup.
//!
//! Human-readable events go to stderr. When a log file or directory is
//! configured, events are also written there as JSON lines through a
//! non-blocking writer; keep the returned guard alive until exit so the
//! writer flushes.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const LOG_PATH_ENV: &str = "DALE_CHALL_LOG_PATH";
const LOG_DIR_ENV: &str = "DALE_CHALL_LOG_DIR";
const LOG_FILE_NAME: &str = "dale-chall.jsonl";

/// Where to write the JSON log file, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file path.
    pub log_path: Option<PathBuf>,
    /// Directory for `dale-chall.jsonl`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `DALE_CHALL_LOG_PATH` / `DALE_CHALL_LOG_DIR`, falling back to the
    /// configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    /// Resolve the log file as (directory, file name).
    fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), LOG_FILE_NAME.to_string()))
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` shows errors only, `-v` shows
/// debug, `-vv` and more show trace, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
