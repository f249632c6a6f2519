// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Select the probe target and artifact location from the environment.
// Dependencies: channel-probe-cli
// ============================================================================

//! ## Overview
//! Values are read with the probe's strict parsers: invalid UTF-8 and empty
//! values fail closed instead of falling back to defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use channel_probe_cli::ConfigError;
use channel_probe_cli::config::parse_timeout_seconds;
use channel_probe_cli::config::read_env_nonempty;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Live chat service base URL; unset selects the in-process stub.
    BaseUrl,
    /// Optional run root override.
    RunRoot,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "CHANNEL_PROBE_SYSTEM_TEST_BASE_URL",
            Self::RunRoot => "CHANNEL_PROBE_SYSTEM_TEST_RUN_ROOT",
            Self::TimeoutSeconds => "CHANNEL_PROBE_SYSTEM_TEST_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Live host to probe; `None` runs against the stub.
    pub base_url: Option<String>,
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
    /// Optional timeout override.
    pub timeout: Option<Duration>,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation.
    pub fn load() -> Result<Self, String> {
        Self::load_with(read_env_nonempty).map_err(|err| err.to_string())
    }

    /// Loads configuration through an injected environment lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is malformed.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let base_url = lookup(SystemTestEnv::BaseUrl.as_str())?
            .map(|value| value.trim().trim_end_matches('/').to_string());
        let run_root = lookup(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        let timeout = lookup(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        Ok(Self {
            base_url,
            run_root,
            timeout,
        })
    }

    /// Returns whether tests target a live host.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.base_url.is_some()
    }
}
