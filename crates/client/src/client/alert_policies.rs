//! Alert policy facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::AlertPolicyParams;

/// Operations on `alerts_policies.json`.
pub struct AlertPolicies<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Alert policies.
    pub fn alert_policies(&self) -> AlertPolicies<'_> {
        AlertPolicies { client: self }
    }
}

impl AlertPolicies<'_> {
    /// List policies, optionally filtered by exact name.
    pub async fn list(&self, filter_name: Option<&str>, page: Option<u32>) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_policies::list_alert_policies(
            &c.http,
            &c.base_url,
            c.api_key(),
            filter_name,
            page,
            c.metrics(),
        )
        .await
    }

    pub async fn create(&self, policy: &AlertPolicyParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_policies::create_alert_policy(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy,
            c.metrics(),
        )
        .await
    }

    pub async fn update(&self, policy_id: u64, policy: &AlertPolicyParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_policies::update_alert_policy(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy_id,
            policy,
            c.metrics(),
        )
        .await
    }

    pub async fn delete(&self, policy_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_policies::delete_alert_policy(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy_id,
            c.metrics(),
        )
        .await
    }

    /// Attach a notification channel to a policy.
    pub async fn associate_with_notification_channel(
        &self,
        policy_id: u64,
        channel_id: u64,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_policies::associate_policy_with_channel(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy_id,
            channel_id,
            c.metrics(),
        )
        .await
    }

    /// Detach a notification channel from a policy.
    pub async fn dissociate_from_notification_channel(
        &self,
        policy_id: u64,
        channel_id: u64,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_policies::dissociate_policy_from_channel(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy_id,
            channel_id,
            c.metrics(),
        )
        .await
    }
}
