//! Deployment markers (`applications/{app}/deployments`).

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::DeploymentParams;

#[derive(Serialize)]
struct DeploymentEnvelope<'a> {
    deployment: &'a DeploymentParams,
}

/// List the deployments recorded for an application.
pub async fn list_deployments(
    client: &Client,
    base_url: &str,
    api_key: &str,
    application_id: u64,
    page: Option<u32>,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let mut params = QueryParams::new();
    params.push_opt("page", page);

    request::get(
        client,
        base_url,
        &format!("applications/{}/deployments.json", application_id),
        api_key,
        &params,
        metrics,
    )
    .await
}

/// Record a deployment.
pub async fn create_deployment(
    client: &Client,
    base_url: &str,
    api_key: &str,
    application_id: u64,
    deployment: &DeploymentParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::post(
        client,
        base_url,
        &format!("applications/{}/deployments.json", application_id),
        api_key,
        &QueryParams::new(),
        &DeploymentEnvelope { deployment },
        metrics,
    )
    .await
}

/// Delete a deployment marker.
pub async fn delete_deployment(
    client: &Client,
    base_url: &str,
    api_key: &str,
    application_id: u64,
    deployment_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::delete(
        client,
        base_url,
        &format!(
            "applications/{}/deployments/{}.json",
            application_id, deployment_id
        ),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
