//! Alert violation endpoint (`alerts_violations.json`).

use chrono::SecondsFormat;
use reqwest::Client;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::AlertViolationListParams;

fn list_params(filters: &AlertViolationListParams) -> QueryParams {
    let iso = |t: &chrono::DateTime<chrono::Utc>| t.to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut params = QueryParams::new();
    params
        .push_opt("start_date", filters.start_date.as_ref().map(iso))
        .push_opt("end_date", filters.end_date.as_ref().map(iso))
        .push_opt("only_open", filters.only_open)
        .push_opt("page", filters.page);
    params
}

/// List alert violations in a time window.
pub async fn list_alert_violations(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filters: &AlertViolationListParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        "alerts_violations.json",
        api_key,
        &list_params(filters),
        metrics,
    )
    .await
}
