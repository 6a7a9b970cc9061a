//! Configuration file loading with precedence handling.

use crate::model::{Delimiter, InvalidDelimiter};
use crate::state::{DEFAULT_BUFFER_SIZE, DEFAULT_PAGE_SIZE};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CSVPEEK_CONFIG";

/// Environment variable overriding the field delimiter.
pub const DELIMITER_ENV: &str = "CSVPEEK_DELIMITER";

/// Environment variable overriding the window buffer size.
pub const BUFFER_SIZE_ENV: &str = "CSVPEEK_BUFFER_SIZE";

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

    /// Config file contains invalid TOML or an invalid value.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A delimiter from the environment or command line was rejected.
    #[error(transparent)]
    InvalidDelimiter(#[from] InvalidDelimiter),

    /// An environment variable holds a value that does not parse.
    #[error("Invalid value {value:?} for {var}")]
    InvalidEnvValue {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },

    /// A resolved setting is out of range.
    #[error("Invalid {field}: {reason}")]
    InvalidValue {
        /// Setting name.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/csvpeek/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Field delimiter (single ASCII character, `\t` or `tab`).
    #[serde(default)]
    pub delimiter: Option<Delimiter>,

    /// Rows buffered per window.
    #[serde(default)]
    pub buffer_size: Option<usize>,

    /// Rows moved by PageUp/PageDown.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Field delimiter.
    pub delimiter: Delimiter,
    /// Rows buffered per window.
    pub buffer_size: usize,
    /// Rows moved per page.
    pub page_size: usize,
    /// Colors disabled.
    pub no_color: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::COMMA,
            buffer_size: DEFAULT_BUFFER_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            no_color: false,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Reject settings the pager cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero buffer or page size.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "buffer_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(self)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/csvpeek/csvpeek.log` on Unix-like systems,
/// or the platform state directory elsewhere. Falls back to the current
/// directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("csvpeek").join("csvpeek.log"),
        None => PathBuf::from("csvpeek.log"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
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

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/csvpeek/config.toml` on Unix, appropriate path on other
/// platforms, `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("csvpeek").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CSVPEEK_CONFIG` environment variable
/// 3. Default path `~/.config/csvpeek/config.toml`
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

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        delimiter: config.delimiter.unwrap_or(defaults.delimiter),
        buffer_size: config.buffer_size.unwrap_or(defaults.buffer_size),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        no_color: config.no_color.unwrap_or(defaults.no_color),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CSVPEEK_DELIMITER`: override delimiter
/// - `CSVPEEK_BUFFER_SIZE`: override buffer size
///
/// # Errors
///
/// Returns error if a set variable does not parse.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(delimiter) = std::env::var(DELIMITER_ENV) {
        config.delimiter = delimiter.parse()?;
    }

    if let Ok(value) = std::env::var(BUFFER_SIZE_ENV) {
        config.buffer_size = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: BUFFER_SIZE_ENV,
                value,
            })?;
    }

    Ok(config)
}

/// Values given explicitly on the command line.
///
/// `None` (or `false` for `no_color`) leaves the lower-precedence value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--delimiter`
    pub delimiter: Option<Delimiter>,
    /// `--buffer-size`
    pub buffer_size: Option<usize>,
    /// `--page-size`
    pub page_size: Option<usize>,
    /// `--no-color`
    pub no_color: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(delimiter) = overrides.delimiter {
        config.delimiter = delimiter;
    }

    if let Some(buffer_size) = overrides.buffer_size {
        config.buffer_size = buffer_size;
    }

    if let Some(page_size) = overrides.page_size {
        config.page_size = page_size;
    }

    // a flag can only turn colors off
    if overrides.no_color {
        config.no_color = true;
    }

    config
}

/// Run the full precedence chain and validate the result.
///
/// # Errors
///
/// Returns the first `ConfigError` from loading, env parsing, or validation.
pub fn resolve(
    config_path: Option<PathBuf>,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let config = apply_env_overrides(merge_config(file))?;
    apply_cli_overrides(config, overrides).validate()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
