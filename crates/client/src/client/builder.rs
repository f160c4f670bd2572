//! Client builder for constructing [`NewRelicClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the API key and both base URLs
//! - Normalizing base URLs so they end in exactly one `/`
//! - Configuring the underlying HTTP client (timeout, redirect limit)
//!
//! # What this module does NOT handle:
//! - Reading the API key from the environment (see `newrelic-config`)
//! - Actual API calls (handled by the resource facades)
//!
//! # Invariants
//! - `api_key` is required and must be non-blank before calling `build()`
//! - Both base URLs are absolute `http`/`https` URLs ending in `/`

use std::time::Duration;

use newrelic_config::Config;
use newrelic_config::constants::{
    DEFAULT_BASE_URL, DEFAULT_INFRA_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
    ENV_API_KEY,
};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::client::NewRelicClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`NewRelicClient`].
///
/// Only the API key is required; both base URLs and the timeout have
/// defaults.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use newrelic_client::NewRelicClient;
///
/// let client = NewRelicClient::builder()
///     .api_key("NRRA-xxxx")
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct NewRelicClientBuilder {
    api_key: Option<SecretString>,
    base_url: String,
    infra_base_url: String,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for NewRelicClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            infra_base_url: DEFAULT_INFRA_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl NewRelicClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account API key sent as `X-Api-Key`.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the API key from an existing secret.
    pub fn api_key_secret(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the REST API base URL. A missing trailing `/` is added.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the Infrastructure API base URL. A missing trailing `/` is added.
    pub fn infra_base_url(mut self, url: impl Into<String>) -> Self {
        self.infra_base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector for request tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Take the API key, base URLs and timeout from a loaded [`Config`].
    ///
    /// ```rust,ignore
    /// use newrelic_client::NewRelicClient;
    /// use newrelic_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().from_env()?.build()?;
    /// let client = NewRelicClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.api_key = Some(config.api_key.clone());
        self.base_url = config.connection.base_url.clone();
        self.infra_base_url = config.connection.infra_base_url.clone();
        self.timeout = config.connection.timeout;
        self
    }

    /// Parse and normalize a base URL so that it ends in a single `/`.
    ///
    /// - `"https://api.newrelic.com/v2"` -> `"https://api.newrelic.com/v2/"`
    /// - `"https://api.newrelic.com/v2//"` -> `"https://api.newrelic.com/v2/"`
    fn normalize_base_url(url: &str) -> Result<String> {
        let normalized = format!("{}/", url.trim().trim_end_matches('/'));
        let parsed = Url::parse(&normalized)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                url
            )));
        }
        Ok(normalized)
    }

    /// Build the [`NewRelicClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if no API key was provided.
    /// Returns [`ClientError::InvalidUrl`] if a base URL does not parse.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<NewRelicClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| {
                ClientError::Configuration(format!(
                    "{} not present in environment and no API key was given",
                    ENV_API_KEY
                ))
            })?;

        let base_url = Self::normalize_base_url(&self.base_url)?;
        let infra_base_url = Self::normalize_base_url(&self.infra_base_url)?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        tracing::debug!(%base_url, %infra_base_url, timeout_secs = self.timeout.as_secs(), "Built New Relic client");

        Ok(NewRelicClient {
            http,
            base_url,
            infra_base_url,
            api_key,
            metrics: self.metrics,
        })
    }
}
