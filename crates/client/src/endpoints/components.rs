//! Plugin component endpoints (`components.json`).

use reqwest::Client;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::ComponentListParams;

fn list_params(filters: &ComponentListParams) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_opt("filter[name]", filters.filter_name.as_deref())
        .push_joined("filter[ids]", &filters.filter_ids)
        .push_opt("filter[plugin_id]", filters.filter_plugin_id)
        .push_opt("page", filters.page);
    params
}

/// Path prefix for a component's metric endpoints.
pub fn metrics_prefix(component_id: u64) -> String {
    format!("components/{}", component_id)
}

/// List plugin components.
pub async fn list_components(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filters: &ComponentListParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        "components.json",
        api_key,
        &list_params(filters),
        metrics,
    )
    .await
}

/// Show one component.
pub async fn get_component(
    client: &Client,
    base_url: &str,
    api_key: &str,
    component_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        &format!("components/{}.json", component_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
