//! Metric name and metric data endpoints shared by metric-bearing resources.
//!
//! Each resource passes its own path prefix (`applications/12`,
//! `servers/7`, `applications/12/hosts/3`, ...); this module appends
//! `/metrics.json` or `/metrics/data.json`.

use chrono::SecondsFormat;
use reqwest::Client;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{MetricDataQuery, MetricNamesQuery};

/// Query string for a metric names request.
pub(crate) fn metric_names_params(query: &MetricNamesQuery) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_opt("name", query.name.as_deref())
        .push_opt("page", query.page)
        .push_opt("cursor", query.cursor.as_deref());
    params
}

/// Query string for a metric data request.
///
/// Wire order: `from`, `to`, `summarize`, `names[]`, `values[]`, `period`.
pub(crate) fn metric_data_params(query: &MetricDataQuery) -> Result<QueryParams> {
    if query.names.iter().all(|name| name.trim().is_empty()) {
        return Err(ClientError::Configuration(
            "metric data requires at least one metric name".to_string(),
        ));
    }

    let mut params = QueryParams::new();
    params
        .push_opt(
            "from",
            query
                .from
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        )
        .push_opt(
            "to",
            query.to.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        )
        .push_opt("summarize", query.summarize.then_some("true"))
        .push_each("names[]", &query.names)
        .push_each("values[]", &query.values)
        .push_opt("period", query.period);
    Ok(params)
}

/// List metric names under `{prefix}/metrics.json`.
pub async fn get_metric_names(
    client: &Client,
    base_url: &str,
    api_key: &str,
    prefix: &str,
    query: &MetricNamesQuery,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let path = format!("{}/metrics.json", prefix);
    request::get(
        client,
        base_url,
        &path,
        api_key,
        &metric_names_params(query),
        metrics,
    )
    .await
}

/// Fetch metric timeslices under `{prefix}/metrics/data.json`.
pub async fn get_metric_data(
    client: &Client,
    base_url: &str,
    api_key: &str,
    prefix: &str,
    query: &MetricDataQuery,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let params = metric_data_params(query)?;
    let path = format!("{}/metrics/data.json", prefix);
    request::get(client, base_url, &path, api_key, &params, metrics).await
}
