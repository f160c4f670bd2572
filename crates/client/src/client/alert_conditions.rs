//! APM/server alert condition facade.
//!
//! # What this module handles:
//! - Listing, creating and deleting conditions of a policy
//! - Merge-update (see [`AlertConditions::update`])
//!
//! # What this module does NOT handle:
//! - NRQL and infrastructure conditions (separate facades)

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::{AlertConditionBody, AlertConditionUpdate};

/// Operations on `alerts_conditions.json`.
pub struct AlertConditions<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// APM, browser, mobile and server alert conditions.
    pub fn alert_conditions(&self) -> AlertConditions<'_> {
        AlertConditions { client: self }
    }
}

impl AlertConditions<'_> {
    /// List the conditions of a policy.
    pub async fn list(&self, policy_id: u64, page: Option<u32>) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions::list_alert_conditions(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy_id,
            page,
            c.metrics(),
        )
        .await
    }

    /// Create a condition on a policy.
    ///
    /// Fails with `Configuration` before sending when `metric` is
    /// `user_defined` and no `user_defined` block is given.
    pub async fn create(&self, policy_id: u64, condition: &AlertConditionBody) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions::create_alert_condition(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy_id,
            condition,
            c.metrics(),
        )
        .await
    }

    /// Update a condition, keeping every field left as `None`.
    ///
    /// The policy's conditions are fetched first. Fails with `NotFound` when
    /// `alert_condition_id` is not among them, and with `Configuration` when
    /// the merged condition is `user_defined` without a `user_defined`
    /// block. Neither failure sends a write.
    pub async fn update(
        &self,
        alert_condition_id: u64,
        policy_id: u64,
        update: AlertConditionUpdate,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions::update_alert_condition(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy_id,
            alert_condition_id,
            update,
            c.metrics(),
        )
        .await
    }

    pub async fn delete(&self, alert_condition_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions::delete_alert_condition(
            &c.http,
            &c.base_url,
            c.api_key(),
            alert_condition_id,
            c.metrics(),
        )
        .await
    }
}
