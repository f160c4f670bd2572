//! Main New Relic REST API client and resource facades.
//!
//! [`NewRelicClient`] holds the shared HTTP client, the base URLs, the API
//! key and an optional metrics collector. Each resource family is reached
//! through a borrowing facade (`client.applications()`,
//! `client.alert_conditions()`, ...) whose methods delegate to the free
//! functions in [`crate::endpoints`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - one facade module per resource family
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Environment or file lookup of the credential (see `newrelic-config`)
//!
//! # Invariants
//! - The client is immutable after `build()`; facades only borrow it.
//! - Every operation performs at most two sequential requests.

pub mod builder;

mod alert_conditions;
mod alert_conditions_infra;
mod alert_conditions_nrql;
mod alert_policies;
mod alert_violations;
mod application_deployments;
mod application_hosts;
mod application_instances;
mod applications;
mod browser_applications;
mod components;
mod dashboards;
mod key_transactions;
mod labels;
mod mobile_applications;
mod notification_channels;
mod plugins;
mod servers;
mod users;

pub use alert_conditions::AlertConditions;
pub use alert_conditions_infra::AlertConditionsInfra;
pub use alert_conditions_nrql::AlertConditionsNrql;
pub use alert_policies::AlertPolicies;
pub use alert_violations::AlertViolations;
pub use application_deployments::ApplicationDeployments;
pub use application_hosts::ApplicationHosts;
pub use application_instances::ApplicationInstances;
pub use applications::Applications;
pub use browser_applications::BrowserApplications;
pub use components::Components;
pub use dashboards::Dashboards;
pub use key_transactions::KeyTransactions;
pub use labels::Labels;
pub use mobile_applications::MobileApplications;
pub use notification_channels::NotificationChannels;
pub use plugins::Plugins;
pub use servers::Servers;
pub use users::Users;

use secrecy::{ExposeSecret, SecretString};

use crate::metrics::MetricsCollector;

/// New Relic REST API v2 client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use newrelic_client::NewRelicClient;
///
/// let client = NewRelicClient::builder()
///     .api_key("NRRA-xxxx")
///     .build()?;
/// let policies = client.alert_policies().list(None, None).await?;
/// ```
#[derive(Debug)]
pub struct NewRelicClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) infra_base_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl NewRelicClient {
    /// Create a new client builder.
    pub fn builder() -> builder::NewRelicClientBuilder {
        builder::NewRelicClientBuilder::new()
    }

    /// REST API base URL, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Infrastructure API base URL, always ending in `/`.
    pub fn infra_base_url(&self) -> &str {
        &self.infra_base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub(crate) fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }
}
