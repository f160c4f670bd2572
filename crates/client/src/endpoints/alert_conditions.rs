//! APM/server alert condition endpoints.
//!
//! Responsibilities:
//! - List, create, update and delete conditions on `alerts_conditions.json`.
//! - Run the merge-update: fetch the policy's conditions, overlay the caller's
//!   fields, validate, then PUT.
//!
//! Invariants:
//! - No write is issued when the condition is missing from the policy
//!   (`NotFound`) or the merged body fails validation (`Configuration`).

use reqwest::Client;

use crate::endpoints::merge::find_entity;
use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::alert_conditions::AlertConditionEnvelope;
use crate::models::{AlertCondition, AlertConditionBody, AlertConditionUpdate};

/// List the alert conditions of a policy.
pub async fn list_alert_conditions(
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
        "alerts_conditions.json",
        api_key,
        &params,
        metrics,
    )
    .await
}

/// Create an alert condition on a policy.
pub async fn create_alert_condition(
    client: &Client,
    base_url: &str,
    api_key: &str,
    policy_id: u64,
    condition: &AlertConditionBody,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    condition.validate()?;

    request::post(
        client,
        base_url,
        &format!("alerts_conditions/policies/{}.json", policy_id),
        api_key,
        &QueryParams::new(),
        &AlertConditionEnvelope { condition },
        metrics,
    )
    .await
}

/// Update an alert condition, keeping every field the caller leaves as `None`.
#[allow(clippy::too_many_arguments)]
pub async fn update_alert_condition(
    client: &Client,
    base_url: &str,
    api_key: &str,
    policy_id: u64,
    alert_condition_id: u64,
    update: AlertConditionUpdate,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let conditions =
        list_alert_conditions(client, base_url, api_key, policy_id, None, metrics).await?;

    let existing: AlertCondition = find_entity(&conditions, "conditions", alert_condition_id)?
        .ok_or_else(|| {
            ClientError::NotFound(format!(
                "Target alert condition is not included in that policy. policy_id: {}, alert_condition_id: {}",
                policy_id, alert_condition_id
            ))
        })?;

    let condition = AlertConditionBody::merge(existing, update);
    condition.validate()?;

    request::put(
        client,
        base_url,
        &format!("alerts_conditions/{}.json", alert_condition_id),
        api_key,
        &QueryParams::new(),
        Some(&AlertConditionEnvelope {
            condition: &condition,
        }),
        metrics,
    )
    .await
}

/// Delete an alert condition.
pub async fn delete_alert_condition(
    client: &Client,
    base_url: &str,
    api_key: &str,
    alert_condition_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::delete(
        client,
        base_url,
        &format!("alerts_conditions/{}.json", alert_condition_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
