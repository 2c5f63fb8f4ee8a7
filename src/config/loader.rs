//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "HOURCALC_CONFIG";

/// Environment variable overriding the log file path.
pub const LOG_FILE_ENV_VAR: &str = "HOURCALC_LOG_FILE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A `[keybindings]` entry names an unknown key or action.
    #[error("Invalid key binding {key:?} = {action:?}")]
    InvalidKeyBinding {
        /// Key name as written in the file.
        key: String,
        /// Action name as written in the file.
        action: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/hourcalc/config.toml`.
///
/// ```toml
/// color = true
/// show_keypad = false
/// log_file_path = "/tmp/hourcalc.log"
///
/// [keybindings]
/// "Space" = "="
/// "Ctrl+q" = "Quit"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Colored output.
    #[serde(default)]
    pub color: Option<bool>,

    /// Draw the on-screen keypad.
    #[serde(default)]
    pub show_keypad: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Extra key bindings, key name → action name.
    #[serde(default)]
    pub keybindings: Option<BTreeMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Colored output.
    pub color: bool,
    /// Draw the on-screen keypad.
    pub show_keypad: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Extra key bindings applied over the defaults.
    pub keybindings: BTreeMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_keypad: true,
            log_file_path: default_log_path(),
            keybindings: BTreeMap::new(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/hourcalc/hourcalc.log` on Linux, or the
/// platform's state/data directory elsewhere. Falls back to the current
/// directory when neither can be determined.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir().or_else(dirs::data_local_dir) {
        Some(dir) => dir.join("hourcalc").join("hourcalc.log"),
        None => PathBuf::from("hourcalc.log"),
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

/// Resolve default config file path.
///
/// Returns `~/.config/hourcalc/config.toml` on Linux, appropriate path on
/// other platforms. Returns `None` if the config directory is unknown.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hourcalc").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `HOURCALC_CONFIG` environment variable
/// 3. Default path `~/.config/hourcalc/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
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
        color: config.color.unwrap_or(defaults.color),
        show_keypad: config.show_keypad.unwrap_or(defaults.show_keypad),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        keybindings: config.keybindings.unwrap_or(defaults.keybindings),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HOURCALC_LOG_FILE`: override log file path
/// - `NO_COLOR`: any value disables colors
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(LOG_FILE_ENV_VAR) {
        config.log_file_path = PathBuf::from(path);
    }

    if std::env::var_os("NO_COLOR").is_some() {
        config.color = false;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually
/// passed are given as `Some`.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    color_override: Option<bool>,
    keypad_override: Option<bool>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(color) = color_override {
        config.color = color;
    }

    if let Some(show_keypad) = keypad_override {
        config.show_keypad = show_keypad;
    }

    if let Some(path) = log_file_override {
        config.log_file_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
