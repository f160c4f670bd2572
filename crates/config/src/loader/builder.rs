//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Build the final `Config` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Profile file loading logic (delegated to profile.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Environment variables take precedence over profile file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::{apply_env, profile_selection};
use super::error::ConfigError;
use super::profile::apply_profile;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_INFRA_BASE_URL, DEFAULT_TIMEOUT_SECS, ENV_BASE_URL,
    ENV_DOTENV_DISABLED, ENV_INFRA_BASE_URL, MAX_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig, ProfileConfig};

/// One source of configuration values.
#[derive(Debug, Default, Clone)]
struct Layer {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    infra_base_url: Option<String>,
    timeout: Option<Duration>,
}

/// Configuration loader that builds config from builder values, environment
/// variables, and profiles.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    explicit: Layer,
    env: Layer,
    profile: Layer,
    profile_name: Option<String>,
    profile_missing: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not
    /// loaded. Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` for invalid syntax and
    /// `ConfigError::DotenvIo` when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the profile to load from the profiles file.
    pub fn with_profile_name(mut self, name: String) -> Self {
        self.profile_name = Some(name);
        self
    }

    /// Override the profiles file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from a profile in the profiles file.
    ///
    /// The profile name and file path fall back to `NEWRELIC_PROFILE` and
    /// `NEWRELIC_CONFIG_PATH` when not set on the builder.
    pub fn from_profile(mut self) -> Result<Self, ConfigError> {
        let (env_profile, env_path) = profile_selection();
        if self.profile_name.is_none() {
            self.profile_name = env_profile;
        }
        if self.config_path.is_none() {
            self.config_path = env_path.map(PathBuf::from);
        }
        apply_profile(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.explicit.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    /// Set the REST API base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.explicit.base_url = Some(url);
        self
    }

    /// Set the Infrastructure API base URL.
    pub fn with_infra_base_url(mut self, url: String) -> Self {
        self.explicit.infra_base_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.explicit.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ProfileNotFound` when a requested profile is missing
    ///   and no API key was resolved from another source.
    /// - `ConfigError::MissingApiKey` when no source provided an API key.
    /// - `ConfigError::InvalidUrl` / `ConfigError::InvalidTimeout` on bad values.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_key = self
            .explicit
            .api_key
            .or(self.env.api_key)
            .or(self.profile.api_key);

        let api_key = match (api_key, self.profile_missing) {
            (Some(key), _) => key,
            (None, Some(profile)) => return Err(ConfigError::ProfileNotFound(profile)),
            (None, None) => return Err(ConfigError::MissingApiKey),
        };

        let base_url = self
            .explicit
            .base_url
            .or(self.env.base_url)
            .or(self.profile.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let infra_base_url = self
            .explicit
            .infra_base_url
            .or(self.env.infra_base_url)
            .or(self.profile.infra_base_url)
            .unwrap_or_else(|| DEFAULT_INFRA_BASE_URL.to_string());
        let timeout = self
            .explicit
            .timeout
            .or(self.env.timeout)
            .or(self.profile.timeout)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let connection = ConnectionConfig {
            base_url: validate_and_normalize_url(ENV_BASE_URL, &base_url)?,
            infra_base_url: validate_and_normalize_url(ENV_INFRA_BASE_URL, &infra_base_url)?,
            timeout,
        };

        Self::validate_timeout(connection.timeout)?;

        Ok(Config {
            api_key,
            connection,
        })
    }

    /// Timeout must be in `1..=MAX_TIMEOUT_SECS` seconds.
    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let secs = timeout.as_secs();
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }
        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn profile_name(&self) -> Option<&String> {
        self.profile_name.as_ref()
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_profile_missing(&mut self, name: Option<String>) {
        self.profile_missing = name;
    }

    pub(crate) fn set_profile_values(&mut self, profile: ProfileConfig) {
        self.profile = Layer {
            api_key: profile.api_key.map(|k| SecretString::new(k.into())),
            base_url: profile.base_url,
            infra_base_url: profile.infra_base_url,
            timeout: profile.timeout,
        };
    }

    pub(crate) fn set_env_api_key(&mut self, api_key: SecretString) {
        self.env.api_key = Some(api_key);
    }

    pub(crate) fn set_env_base_url(&mut self, url: String) {
        self.env.base_url = Some(url);
    }

    pub(crate) fn set_env_infra_base_url(&mut self, url: String) {
        self.env.infra_base_url = Some(url);
    }

    pub(crate) fn set_env_timeout(&mut self, timeout: Duration) {
        self.env.timeout = Some(timeout);
    }
}

/// Validate a base URL and make sure it ends with exactly one `/`.
///
/// Resource paths are joined onto the base (`applications.json`), so the
/// trailing slash is load-bearing.
pub(crate) fn validate_and_normalize_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
        var: var.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            var: var.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(format!("{}/", trimmed))
}
