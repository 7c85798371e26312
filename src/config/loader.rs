//! Loading and layering of the roster config file.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Members endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Config file could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a regular file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// File that was tried.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Offending file.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A key parsed but holds a value that cannot be used.
    #[error("Invalid value for {key} in {path}: {reason}")]
    InvalidValue {
        /// File holding the value.
        path: PathBuf,
        /// Offending key.
        key: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Contents of `config.toml`. Every key is optional.
///
/// ```toml
/// endpoint = "https://example.com/members.json"
/// refetch_on_page_change = false
/// request_timeout_secs = 10
/// log_file_path = "/tmp/roster.log"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// URL (or JSON file path) the records are loaded from.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Re-fetch the collection whenever navigation changes the page.
    #[serde(default)]
    pub refetch_on_page_change: Option<bool>,

    /// Timeout for one HTTP request.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Settings the app runs with, after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Record source.
    pub endpoint: String,
    /// Page changes trigger a fetch.
    pub refetch_on_page_change: bool,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            refetch_on_page_change: true,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Where the log goes when `log_file_path` is not set.
///
/// Returns `~/.local/state/roster/roster.log` on Linux, or the platform
/// equivalent. Falls back to the current directory when no state directory
/// exists (macOS and Windows have none).
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("roster").join("roster.log"),
        None => PathBuf::from("roster.log"),
    }
}

/// Read and parse one config file.
///
/// A missing file is `Ok(None)`.
///
/// # Errors
///
/// `ReadError` or `ParseError` for a file that exists but is unusable,
/// `InvalidValue` for a zero `request_timeout_secs`.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config = toml::from_str::<ConfigFile>(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    if config.request_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidValue {
            path,
            key: "request_timeout_secs",
            reason: "must be at least 1 second".to_string(),
        });
    }

    Ok(Some(config))
}

/// `<config_dir>/roster/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roster").join("config.toml"))
}

/// Find and load the config file.
///
/// First match wins:
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ROSTER_CONFIG` environment variable
/// 3. Default path `~/.config/roster/config.toml`
///
/// # Errors
///
/// Only the chosen file is read; its errors are returned as-is.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("ROSTER_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// `ROSTER_ENDPOINT` replaces the endpoint unless blank.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(endpoint) = std::env::var("ROSTER_ENDPOINT") {
        if !endpoint.trim().is_empty() {
            config.endpoint = endpoint;
        }
    }
    config
}

/// Fill unset file keys from the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(file) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        endpoint: file.endpoint.unwrap_or(defaults.endpoint),
        refetch_on_page_change: file
            .refetch_on_page_change
            .unwrap_or(defaults.refetch_on_page_change),
        request_timeout_secs: file
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
        log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Last layer: values from the command line. `None` leaves the setting alone.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    endpoint_override: Option<String>,
    refetch_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(endpoint) = endpoint_override {
        config.endpoint = endpoint;
    }
    if let Some(refetch) = refetch_override {
        config.refetch_on_page_change = refetch;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
