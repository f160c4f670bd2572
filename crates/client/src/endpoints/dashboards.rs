//! Insights dashboard endpoints (`dashboards.json`).
//!
//! Dashboard documents are deeply nested and versioned server-side, so
//! create and update take the `{"dashboard": {...}}` document as raw JSON.

use reqwest::Client;
use serde_json::Value;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::DashboardListParams;

fn list_params(filters: &DashboardListParams) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_opt("filter[title]", filters.filter_title.as_deref())
        .push_joined("filter[ids]", &filters.filter_ids)
        .push_opt("page", filters.page);
    params
}

/// List dashboards.
pub async fn list_dashboards(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filters: &DashboardListParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        "dashboards.json",
        api_key,
        &list_params(filters),
        metrics,
    )
    .await
}

/// Show one dashboard.
pub async fn get_dashboard(
    client: &Client,
    base_url: &str,
    api_key: &str,
    dashboard_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        &format!("dashboards/{}.json", dashboard_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}

/// Create a dashboard from a `{"dashboard": {...}}` document.
pub async fn create_dashboard(
    client: &Client,
    base_url: &str,
    api_key: &str,
    document: &Value,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::post(
        client,
        base_url,
        "dashboards.json",
        api_key,
        &QueryParams::new(),
        document,
        metrics,
    )
    .await
}

/// Replace a dashboard with a `{"dashboard": {...}}` document.
pub async fn update_dashboard(
    client: &Client,
    base_url: &str,
    api_key: &str,
    dashboard_id: u64,
    document: &Value,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::put(
        client,
        base_url,
        &format!("dashboards/{}.json", dashboard_id),
        api_key,
        &QueryParams::new(),
        Some(document),
        metrics,
    )
    .await
}

/// Delete a dashboard.
pub async fn delete_dashboard(
    client: &Client,
    base_url: &str,
    api_key: &str,
    dashboard_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::delete(
        client,
        base_url,
        &format!("dashboards/{}.json", dashboard_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
