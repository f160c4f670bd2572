//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `NEWRELIC_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Values already set through builder methods are never overwritten.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_CONFIG_PATH, ENV_INFRA_BASE_URL, ENV_PROFILE, ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(key) = env_var_or_none(ENV_API_KEY) {
        loader.set_env_api_key(SecretString::new(key.into()));
    }
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_env_base_url(url);
    }
    if let Some(url) = env_var_or_none(ENV_INFRA_BASE_URL) {
        loader.set_env_infra_base_url(url);
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_env_timeout(Duration::from_secs(secs));
    }
    Ok(())
}

/// Profile selection variables, read before the profile file is applied.
pub fn profile_selection() -> (Option<String>, Option<String>) {
    (env_var_or_none(ENV_PROFILE), env_var_or_none(ENV_CONFIG_PATH))
}
