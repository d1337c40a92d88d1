//! Configuration loading and discovery.
//!
//! Configuration is merged from, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config in the XDG config directory (`~/.config/dale-chall/config.<ext>`)
//! 3. Project config found by walking up from the current directory
//! 4. Explicit files (`--config`)
//! 5. `DALE_CHALL_*` environment variables
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Project config names
//!
//! `.dale-chall.<ext>` and `dale-chall.<ext>` in the current directory or any
//! parent, stopping at a directory containing `.git`. When several exist in
//! the same directory they are all merged; regular files override dotfiles.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use dale_chall_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("partitions: {}", config.partitions_or_default());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default number of partitions for word-count datasets.
pub const DEFAULT_PARTITIONS: usize = 20;

/// Default easy-word list file, resolved against the working directory.
pub const DEFAULT_SIMPLE_WORDS: &str = "DaleChallEasyWordList.txt";

/// Default execution-context address: one worker per available core.
pub const DEFAULT_MASTER: &str = "local[*]";

/// Default number of entries printed by the top-words mode.
pub const DEFAULT_TOP_COUNT: usize = 20;

/// Default maximum input size (64 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 64 * 1024 * 1024;

/// The configuration for dale-chall.
///
/// Every field is optional in config files; CLI flags override whatever is
/// loaded here.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSON log files. File logging is off when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Number of partitions used for word-count datasets.
    pub partitions: Option<usize>,
    /// Path to the easy-word list (one word per line).
    pub simple_words: Option<Utf8PathBuf>,
    /// Execution-context address: `local`, `local[N]` or `local[*]`.
    pub master: Option<String>,
    /// Number of words printed by the top-words mode.
    pub top_count: Option<usize>,
    /// Maximum input size in bytes (default: 64 MiB).
    pub max_input_bytes: Option<u64>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
}

impl Config {
    /// Configured partition count, or [`DEFAULT_PARTITIONS`].
    pub fn partitions_or_default(&self) -> usize {
        self.partitions.unwrap_or(DEFAULT_PARTITIONS)
    }

    /// Configured easy-word list path, or [`DEFAULT_SIMPLE_WORDS`].
    pub fn simple_words_or_default(&self) -> Utf8PathBuf {
        self.simple_words
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_SIMPLE_WORDS))
    }

    /// Configured master address, or [`DEFAULT_MASTER`].
    pub fn master_or_default(&self) -> &str {
        self.master.as_deref().unwrap_or(DEFAULT_MASTER)
    }

    /// Configured top-words count, or [`DEFAULT_TOP_COUNT`].
    pub fn top_count_or_default(&self) -> usize {
        self.top_count.unwrap_or(DEFAULT_TOP_COUNT)
    }

    /// Effective input size limit; `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<u64> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which configuration files were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "dale-chall";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "DALE_CHALL_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/dale-chall/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load. Later files take precedence.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // DALE_CHALL_PARTITIONS=8, DALE_CHALL_MASTER=local[4], etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(
            log_level = config.log_level.as_str(),
            partitions = ?config.partitions,
            master = ?config.master,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Walk up from `start` and return the config files of the closest
    /// directory that has any, ordered low→high precedence.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let dotfiles = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!(".{APP_NAME}.{ext}")));
            let regular = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{APP_NAME}.{ext}")));
            let found: Vec<Utf8PathBuf> = dotfiles.chain(regular).filter(|p| p.is_file()).collect();

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config next to the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|p| p.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/dale-chall/` on Linux, `~/Library/Application Support/dale-chall/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}
