//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FOSSVIEW_CONFIG";

/// Environment variable overriding the listing page size.
pub const PAGE_SIZE_ENV: &str = "FOSSVIEW_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending key.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/fossview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Articles per listing page.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Notification auto-dismiss delay in milliseconds.
    #[serde(default)]
    pub notification_ms: Option<u64>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Location shown on startup.
    #[serde(default)]
    pub start_path: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Articles per listing page (never zero).
    pub page_size: u32,
    /// Notification auto-dismiss delay in milliseconds.
    pub notification_ms: u64,
    /// Colors disabled.
    pub no_color: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Location shown on startup.
    pub start_path: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            notification_ms: 2000,
            no_color: false,
            log_file_path: default_log_path(),
            start_path: "/".to_string(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/fossview/fossview.log` on Linux, the platform
/// state directory elsewhere, or `fossview.log` in the current directory
/// when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("fossview").join("fossview.log")
    } else {
        PathBuf::from("fossview.log")
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fossview").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors, or sets
/// `page_size = 0`.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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

    if config.page_size == Some(0) {
        return Err(ConfigError::InvalidValue {
            field: "page_size",
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FOSSVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/fossview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        notification_ms: config.notification_ms.unwrap_or(defaults.notification_ms),
        no_color: config.no_color.unwrap_or(defaults.no_color),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        start_path: config.start_path.unwrap_or(defaults.start_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// `FOSSVIEW_PAGE_SIZE` overrides the page size. An unparsable or zero
/// value is ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(PAGE_SIZE_ENV) {
        match raw.trim().parse::<u32>() {
            Ok(size) if size > 0 => config.page_size = size,
            _ => warn!(value = %raw, "ignoring invalid {PAGE_SIZE_ENV}"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags the user actually passed are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<u32>,
    no_color_flag: bool,
    start_path_override: Option<String>,
) -> ResolvedConfig {
    if let Some(size) = page_size_override.filter(|&s| s > 0) {
        config.page_size = size;
    }

    if no_color_flag {
        config.no_color = true;
    }

    if let Some(path) = start_path_override {
        config.start_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
