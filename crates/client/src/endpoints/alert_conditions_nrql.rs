//! NRQL alert condition endpoints.
//!
//! Same shape as the APM condition endpoints, under `alerts_nrql_conditions`.
//! Both create and update normalize the body for its threshold type before
//! anything is sent.

use reqwest::Client;

use crate::endpoints::merge::find_entity;
use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::nrql_conditions::NrqlConditionEnvelope;
use crate::models::{NrqlCondition, NrqlConditionBody, NrqlConditionUpdate};

/// List the NRQL conditions of a policy.
pub async fn list_nrql_conditions(
    client: &Client,
    base_url: &str,
    api_key: &str,
    policy_id: u64,
    page: Option<u32>,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let mut params = QueryParams::new();
    params.push("policy_id", policy_id).push_opt("page", page);

    request::get(
        client,
        base_url,
        "alerts_nrql_conditions.json",
        api_key,
        &params,
        metrics,
    )
    .await
}

/// Create a NRQL condition on a policy.
pub async fn create_nrql_condition(
    client: &Client,
    base_url: &str,
    api_key: &str,
    policy_id: u64,
    condition: NrqlConditionBody,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let mut condition = condition;
    condition.normalize()?;

    request::post(
        client,
        base_url,
        &format!("alerts_nrql_conditions/policies/{}.json", policy_id),
        api_key,
        &QueryParams::new(),
        &NrqlConditionEnvelope {
            nrql_condition: &condition,
        },
        metrics,
    )
    .await
}

/// Update a NRQL condition, keeping every field the caller leaves as `None`.
#[allow(clippy::too_many_arguments)]
pub async fn update_nrql_condition(
    client: &Client,
    base_url: &str,
    api_key: &str,
    policy_id: u64,
    nrql_condition_id: u64,
    update: NrqlConditionUpdate,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let conditions =
        list_nrql_conditions(client, base_url, api_key, policy_id, None, metrics).await?;

    let existing: NrqlCondition = find_entity(&conditions, "nrql_conditions", nrql_condition_id)?
        .ok_or_else(|| {
            ClientError::NotFound(format!(
                "Target alert condition nrql is not included in that policy. policy_id: {}, alert_condition_nrql_id: {}",
                policy_id, nrql_condition_id
            ))
        })?;

    let mut condition = NrqlConditionBody::merge(existing, update);
    condition.normalize()?;

    request::put(
        client,
        base_url,
        &format!("alerts_nrql_conditions/{}.json", nrql_condition_id),
        api_key,
        &QueryParams::new(),
        Some(&NrqlConditionEnvelope {
            nrql_condition: &condition,
        }),
        metrics,
    )
    .await
}

/// Delete a NRQL condition.
pub async fn delete_nrql_condition(
    client: &Client,
    base_url: &str,
    api_key: &str,
    nrql_condition_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::delete(
        client,
        base_url,
        &format!("alerts_nrql_conditions/{}.json", nrql_condition_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
