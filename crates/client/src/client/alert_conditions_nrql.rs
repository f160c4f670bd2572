//! NRQL alert condition facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::{NrqlConditionBody, NrqlConditionUpdate};

/// Operations on `alerts_nrql_conditions.json`.
pub struct AlertConditionsNrql<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// NRQL alert conditions.
    pub fn alert_conditions_nrql(&self) -> AlertConditionsNrql<'_> {
        AlertConditionsNrql { client: self }
    }
}

impl AlertConditionsNrql<'_> {
    pub async fn list(&self, policy_id: u64, page: Option<u32>) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions_nrql::list_nrql_conditions(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy_id,
            page,
            c.metrics(),
        )
        .await
    }

    /// Create a NRQL condition.
    ///
    /// A `static` condition needs `value_function`; an `outlier` condition
    /// needs `expected_groups` and `ignore_overlap`. Fields belonging to the
    /// other threshold type are dropped.
    pub async fn create(&self, policy_id: u64, condition: NrqlConditionBody) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions_nrql::create_nrql_condition(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy_id,
            condition,
            c.metrics(),
        )
        .await
    }

    /// Update a NRQL condition, keeping every field left as `None`.
    ///
    /// Threshold-type requirements are checked on the merged condition.
    pub async fn update(
        &self,
        nrql_condition_id: u64,
        policy_id: u64,
        update: NrqlConditionUpdate,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions_nrql::update_nrql_condition(
            &c.http,
            &c.base_url,
            c.api_key(),
            policy_id,
            nrql_condition_id,
            update,
            c.metrics(),
        )
        .await
    }

    pub async fn delete(&self, nrql_condition_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_conditions_nrql::delete_nrql_condition(
            &c.http,
            &c.base_url,
            c.api_key(),
            nrql_condition_id,
            c.metrics(),
        )
        .await
    }
}
