//! Configuration file loading with precedence handling.
//!
//! Carries the process-wide display preferences: the newest-first frame
//! ordering default and the log file path. Precedence (highest to lowest):
//! CLI args → environment variables → config file → hardcoded defaults.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues and the like).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/crashlens/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Render stacktraces newest frame first.
    #[serde(default)]
    pub newest_first: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Render stacktraces newest frame first.
    pub newest_first: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            newest_first: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/crashlens/crashlens.log` on Unix-like systems,
/// or the platform-appropriate state path elsewhere. Falls back to the
/// current directory when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("crashlens").join("crashlens.log")
    } else {
        PathBuf::from("crashlens.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/crashlens/config.toml` on Unix, the platform
/// equivalent elsewhere. `None` if the config directory cannot be
/// determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("crashlens").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults). Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `CRASHLENS_CONFIG` environment variable
/// 3. Default path `~/.config/crashlens/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("CRASHLENS_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        newest_first: config.newest_first.unwrap_or(defaults.newest_first),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// `CRASHLENS_NEWEST_FIRST` accepts `1`/`true` and `0`/`false`; anything
/// else is ignored rather than erroring.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("CRASHLENS_NEWEST_FIRST") {
        match raw.as_str() {
            "1" | "true" => config.newest_first = true,
            "0" | "false" => config.newest_first = false,
            _ => {}
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags the user explicitly set.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    newest_first_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(newest_first) = newest_first_override {
        config.newest_first = newest_first;
    }

    config
}
