//! Alert policy endpoints.
//!
//! Responsibilities:
//! - CRUD on `alerts_policies.json` / `alerts_policies/{id}.json`.
//! - Attaching and detaching notification channels via `alerts_policy_channels.json`.

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::AlertPolicyParams;

#[derive(Serialize)]
struct PolicyEnvelope<'a> {
    policy: &'a AlertPolicyParams,
}

/// List alert policies, optionally filtered by exact name.
pub async fn list_alert_policies(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filter_name: Option<&str>,
    page: Option<u32>,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let mut params = QueryParams::new();
    params
        .push_opt("filter[name]", filter_name)
        .push_opt("page", page);

    request::get(
        client,
        base_url,
        "alerts_policies.json",
        api_key,
        &params,
        metrics,
    )
    .await
}

/// Create an alert policy.
pub async fn create_alert_policy(
    client: &Client,
    base_url: &str,
    api_key: &str,
    policy: &AlertPolicyParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::post(
        client,
        base_url,
        "alerts_policies.json",
        api_key,
        &QueryParams::new(),
        &PolicyEnvelope { policy },
        metrics,
    )
    .await
}

/// Replace the name and incident preference of an alert policy.
pub async fn update_alert_policy(
    client: &Client,
    base_url: &str,
    api_key: &str,
    policy_id: u64,
    policy: &AlertPolicyParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::put(
        client,
        base_url,
        &format!("alerts_policies/{}.json", policy_id),
        api_key,
        &QueryParams::new(),
        Some(&PolicyEnvelope { policy }),
        metrics,
    )
    .await
}

/// Delete an alert policy.
pub async fn delete_alert_policy(
    client: &Client,
    base_url: &str,
    api_key: &str,
    policy_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::delete(
        client,
        base_url,
        &format!("alerts_policies/{}.json", policy_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}

/// Attach a notification channel to a policy.
pub async fn associate_policy_with_channel(
    client: &Client,
    base_url: &str,
    api_key: &str,
    policy_id: u64,
    channel_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let mut params = QueryParams::new();
    params
        .push("policy_id", policy_id)
        .push("channel_ids", channel_id);

    request::put::<()>(
        client,
        base_url,
        "alerts_policy_channels.json",
        api_key,
        &params,
        None,
        metrics,
    )
    .await
}

/// Detach a notification channel from a policy.
pub async fn dissociate_policy_from_channel(
    client: &Client,
    base_url: &str,
    api_key: &str,
    policy_id: u64,
    channel_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let mut params = QueryParams::new();
    params
        .push("policy_id", policy_id)
        .push("channel_id", channel_id);

    request::delete(
        client,
        base_url,
        "alerts_policy_channels.json",
        api_key,
        &params,
        metrics,
    )
    .await
}
