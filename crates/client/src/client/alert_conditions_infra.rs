//! Infrastructure alert condition facade.
//!
//! Requests go to the client's `infra_base_url`, not the REST API host.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::InfraConditionParams;

/// Operations on the Infrastructure API's `alerts/conditions`.
pub struct AlertConditionsInfra<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Infrastructure alert conditions.
    pub fn alert_conditions_infra(&self) -> AlertConditionsInfra<'_> {
        AlertConditionsInfra { client: self }
    }
}

impl AlertConditionsInfra<'_> {
    /// List the conditions of a policy. `limit` defaults to 50 and `offset` to 0.
    pub async fn list(
        &self,
        policy_id: u64,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions_infra::list_infra_conditions(
            &c.http,
            &c.infra_base_url,
            c.api_key(),
            policy_id,
            limit,
            offset,
            c.metrics(),
        )
        .await
    }

    pub async fn show(&self, condition_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions_infra::get_infra_condition(
            &c.http,
            &c.infra_base_url,
            c.api_key(),
            condition_id,
            c.metrics(),
        )
        .await
    }

    pub async fn create(&self, condition: &InfraConditionParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions_infra::create_infra_condition(
            &c.http,
            &c.infra_base_url,
            c.api_key(),
            condition,
            c.metrics(),
        )
        .await
    }

    pub async fn update(
        &self,
        condition_id: u64,
        condition: &InfraConditionParams,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions_infra::update_infra_condition(
            &c.http,
            &c.infra_base_url,
            c.api_key(),
            condition_id,
            condition,
            c.metrics(),
        )
        .await
    }

    pub async fn delete(&self, condition_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions_infra::delete_infra_condition(
            &c.http,
            &c.infra_base_url,
            c.api_key(),
            condition_id,
            c.metrics(),
        )
        .await
    }
}
