//! Application instance endpoints (`applications/{app}/instances`).
//!
//! Filters are the same as for hosts.

use reqwest::Client;

use crate::endpoints::application_hosts::host_list_params;
use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::ApplicationHostListParams;

/// Path prefix for an instance's metric endpoints.
pub fn metrics_prefix(application_id: u64, instance_id: u64) -> String {
    format!("applications/{}/instances/{}", application_id, instance_id)
}

/// List the instances of an application.
pub async fn list_application_instances(
    client: &Client,
    base_url: &str,
    api_key: &str,
    application_id: u64,
    filters: &ApplicationHostListParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        &format!("applications/{}/instances.json", application_id),
        api_key,
        &host_list_params(filters),
        metrics,
    )
    .await
}

/// Show one instance of an application.
pub async fn get_application_instance(
    client: &Client,
    base_url: &str,
    api_key: &str,
    application_id: u64,
    instance_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        &format!("applications/{}/instances/{}.json", application_id, instance_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
