//! Application host endpoints (`applications/{app}/hosts`).

use reqwest::Client;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::ApplicationHostListParams;

/// Query string shared by the host and instance listings.
pub(crate) fn host_list_params(filters: &ApplicationHostListParams) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_opt("filter[hostname]", filters.filter_hostname.as_deref())
        .push_joined("filter[ids]", &filters.filter_ids)
        .push_opt("page", filters.page);
    params
}

/// Path prefix for a host's metric endpoints.
pub fn metrics_prefix(application_id: u64, host_id: u64) -> String {
    format!("applications/{}/hosts/{}", application_id, host_id)
}

/// List the hosts of an application.
pub async fn list_application_hosts(
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
        &format!("applications/{}/hosts.json", application_id),
        api_key,
        &host_list_params(filters),
        metrics,
    )
    .await
}

/// Show one host of an application.
pub async fn get_application_host(
    client: &Client,
    base_url: &str,
    api_key: &str,
    application_id: u64,
    host_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        &format!("applications/{}/hosts/{}.json", application_id, host_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
