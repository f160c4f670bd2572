//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the resolved `Config` (API key + connection settings).
//! - Define the on-disk profile file format.
//!
//! Does NOT handle:
//! - Loading from env or files (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API key is a `secrecy::SecretString` and never appears in `Debug` output.
//! - Base URLs in a built `Config` always end with `/`.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_INFRA_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Connection settings shared by every resource facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// REST API v2 root, e.g. `https://api.newrelic.com/v2/`
    pub base_url: String,
    /// Infrastructure alerts API root, e.g. `https://infra-api.newrelic.com/v2/`
    pub infra_base_url: String,
    /// Per-request timeout handed to the HTTP transport
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            infra_base_url: DEFAULT_INFRA_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The account API key sent as `X-Api-Key`.
    pub api_key: SecretString,
    /// Connection settings.
    pub connection: ConnectionConfig,
}

impl Config {
    /// Create a config with the given API key and default endpoints.
    pub fn with_api_key(api_key: SecretString) -> Self {
        Self {
            api_key,
            connection: ConnectionConfig::default(),
        }
    }
}

/// A single named profile as stored in the profiles file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infra_base_url: Option<String>,
    #[serde(
        default,
        rename = "timeout_seconds",
        with = "duration_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
}

/// On-disk profiles file: `{"profiles": {"<name>": {...}}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}
