// crates/channel-probe-cli/src/config.rs
// ============================================================================
// Module: Probe Configuration
// Description: Layered configuration for the channel probe.
// Purpose: Merge defaults, TOML file, environment, and CLI overrides.
// Dependencies: channel-probe-client, serde, thiserror, toml, url
// ============================================================================

//! ## Overview
//! [`ProbeConfig`] starts from built-in defaults, then applies an optional
//! TOML file, then `CHANNEL_PROBE_*` environment variables, then CLI flags.
//! Environment values are read with strict UTF-8 enforcement and empty values
//! fail closed.
//! Invariants:
//! - Config files larger than [`MAX_CONFIG_FILE_SIZE`] are rejected.
//! - An explicit or env-provided config path must exist; the default path is
//!   optional.
//! - A loaded config always passes [`ProbeConfig::validate`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use channel_probe_client::ClientConfig;
use channel_probe_client::MockUsersRequest;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "channel-probe.toml";
/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CHANNEL_PROBE_CONFIG";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV_VAR: &str = "CHANNEL_PROBE_BASE_URL";
/// Environment variable overriding the mock-user prefix.
pub const PREFIX_ENV_VAR: &str = "CHANNEL_PROBE_PREFIX";
/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_ENV_VAR: &str = "CHANNEL_PROBE_TIMEOUT_SEC";
/// Maximum config file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Default chat service base URL.
pub const DEFAULT_BASE_URL: &str = "https://api-sb11.rpc.ziichat.dev";
/// Default mock-user prefix.
pub const DEFAULT_PREFIX: &str = "create-channel-http-api-test";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Effective probe configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// Chat service base URL.
    pub base_url: String,
    /// Prefix for provisioned mock users; teardown deletes by this prefix.
    pub prefix: String,
    /// Number of mock users to provision.
    pub quantity: u32,
    /// Badge value for provisioned mock users.
    pub badge: u32,
    /// Optional request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            quantity: 1,
            badge: 0,
            timeout_secs: None,
        }
    }
}

/// Command-line overrides applied last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOverrides {
    /// Base URL override.
    pub base_url: Option<String>,
    /// Prefix override.
    pub prefix: Option<String>,
    /// Timeout override in seconds.
    pub timeout_secs: Option<u64>,
}

impl ProbeConfig {
    /// Loads the layered configuration using the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, an
    /// environment value is malformed, or the result fails validation.
    pub fn load(path: Option<&Path>, overrides: &ProbeOverrides) -> Result<Self, ConfigError> {
        Self::load_with(path, overrides, read_env_nonempty)
    }

    /// Loads the layered configuration using `lookup` for environment values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] under the same conditions as [`ProbeConfig::load`].
    pub fn load_with<F>(
        path: Option<&Path>,
        overrides: &ProbeOverrides,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let mut config = match resolve_path(path, &lookup)? {
            Some(resolved) => Self::from_file(&resolved)?,
            None => Self::default(),
        };
        config.apply_env_with(&lookup)?;
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML config file without applying other layers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is unreadable, oversized, not
    /// UTF-8, or not valid TOML for this schema.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)
            .map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses a TOML document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Applies `CHANNEL_PROBE_*` overrides through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a value is malformed.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV_VAR)? {
            self.base_url = base_url.trim().to_string();
        }
        if let Some(prefix) = lookup(PREFIX_ENV_VAR)? {
            self.prefix = prefix.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV_VAR)? {
            self.timeout_secs = Some(parse_timeout_seconds(TIMEOUT_ENV_VAR, &raw)?.as_secs());
        }
        Ok(())
    }

    /// Applies command-line overrides.
    pub fn apply_overrides(&mut self, overrides: &ProbeOverrides) {
        if let Some(base_url) = &overrides.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(prefix) = &overrides.prefix {
            self.prefix.clone_from(prefix);
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = Some(timeout_secs);
        }
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a field is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(self.base_url.trim()).map_err(|err| {
            ConfigError::Invalid(format!("base_url is not a valid url: {}: {err}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ConfigError::Invalid(format!(
                "base_url must be an http(s) url with a host: {}",
                self.base_url
            )));
        }
        if self.prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("prefix must be non-empty".to_string()));
        }
        if self.quantity == 0 {
            return Err(ConfigError::Invalid("quantity must be greater than zero".to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid("timeout_secs must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Returns the configured request timeout.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Returns connection settings for the HTTP client.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout(),
        }
    }

    /// Returns the faker request used during suite setup.
    #[must_use]
    pub fn mock_users_request(&self) -> MockUsersRequest {
        MockUsersRequest {
            prefix: self.prefix.clone(),
            quantity: self.quantity,
            badge: self.badge,
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config file path, returning `None` when no file applies.
fn resolve_path<F>(path: Option<&Path>, lookup: &F) -> Result<Option<PathBuf>, ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    if let Some(path) = path {
        return Ok(Some(path.to_path_buf()));
    }
    if let Some(env_path) = lookup(CONFIG_ENV_VAR)? {
        return Ok(Some(PathBuf::from(env_path.trim())));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_NAME);
    Ok(default.is_file().then_some(default))
}

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, ConfigError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{name} must be valid UTF-8")))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the variable is set but empty or
/// whitespace, or is not valid UTF-8.
pub fn read_env_nonempty(name: &str) -> Result<Option<String>, ConfigError> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => {
            Err(ConfigError::Invalid(format!("{name} must not be empty")))
        }
        other => Ok(other),
    }
}

/// Parses a positive whole number of seconds.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the value is non-numeric or zero.
pub fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        ConfigError::Invalid(format!("{name} must be a positive integer number of seconds"))
    })?;
    if secs == 0 {
        return Err(ConfigError::Invalid(format!("{name} must be greater than zero")));
    }
    Ok(Duration::from_secs(secs))
}
