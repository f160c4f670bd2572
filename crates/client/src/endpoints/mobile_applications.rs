//! Mobile application endpoints (`mobile_applications.json`).
//!
//! Metric queries reuse [`MetricNamesQuery`](crate::models::MetricNamesQuery)
//! and [`MetricDataQuery`](crate::models::MetricDataQuery); `cursor` and
//! `period` are only meaningful here.

use reqwest::Client;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;

/// Path prefix for a mobile application's metric endpoints.
pub fn metrics_prefix(mobile_application_id: u64) -> String {
    format!("mobile_applications/{}", mobile_application_id)
}

/// List mobile applications.
pub async fn list_mobile_applications(
    client: &Client,
    base_url: &str,
    api_key: &str,
    page: Option<u32>,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let mut params = QueryParams::new();
    params.push_opt("page", page);

    request::get(
        client,
        base_url,
        "mobile_applications.json",
        api_key,
        &params,
        metrics,
    )
    .await
}

/// Show one mobile application.
pub async fn get_mobile_application(
    client: &Client,
    base_url: &str,
    api_key: &str,
    mobile_application_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        &format!("mobile_applications/{}.json", mobile_application_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
