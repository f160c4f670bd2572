//! Infrastructure alert condition endpoints.
//!
//! These live on the Infrastructure API host (`infra_base_url`), use
//! extension-less paths (`alerts/conditions/{id}`) and wrap bodies in `data`.

use reqwest::Client;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::InfraConditionParams;

/// Page size used when the caller does not give one.
pub const DEFAULT_INFRA_LIMIT: u32 = 50;

/// List the infrastructure conditions of a policy.
#[allow(clippy::too_many_arguments)]
pub async fn list_infra_conditions(
    client: &Client,
    infra_base_url: &str,
    api_key: &str,
    policy_id: u64,
    limit: Option<u32>,
    offset: Option<u32>,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let mut params = QueryParams::new();
    params
        .push("policy_id", policy_id)
        .push("limit", limit.unwrap_or(DEFAULT_INFRA_LIMIT))
        .push("offset", offset.unwrap_or(0));

    request::get(
        client,
        infra_base_url,
        "alerts/conditions",
        api_key,
        &params,
        metrics,
    )
    .await
}

/// Show one infrastructure condition.
pub async fn get_infra_condition(
    client: &Client,
    infra_base_url: &str,
    api_key: &str,
    condition_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        infra_base_url,
        &format!("alerts/conditions/{}", condition_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}

/// Create an infrastructure condition.
pub async fn create_infra_condition(
    client: &Client,
    infra_base_url: &str,
    api_key: &str,
    condition: &InfraConditionParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::post(
        client,
        infra_base_url,
        "alerts/conditions",
        api_key,
        &QueryParams::new(),
        &condition.to_body(),
        metrics,
    )
    .await
}

/// Replace an infrastructure condition.
pub async fn update_infra_condition(
    client: &Client,
    infra_base_url: &str,
    api_key: &str,
    condition_id: u64,
    condition: &InfraConditionParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::put(
        client,
        infra_base_url,
        &format!("alerts/conditions/{}", condition_id),
        api_key,
        &QueryParams::new(),
        Some(&condition.to_body()),
        metrics,
    )
    .await
}

/// Delete an infrastructure condition.
pub async fn delete_infra_condition(
    client: &Client,
    infra_base_url: &str,
    api_key: &str,
    condition_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::delete(
        client,
        infra_base_url,
        &format!("alerts/conditions/{}", condition_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
