//! Browser application endpoints (`browser_applications.json`).

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::NamedListParams;

#[derive(Serialize)]
struct BrowserApplicationEnvelope<'a> {
    browser_application: BrowserApplicationBody<'a>,
}

#[derive(Serialize)]
struct BrowserApplicationBody<'a> {
    name: &'a str,
}

/// Query string shared by name/id filtered listings.
pub(crate) fn named_list_params(filters: &NamedListParams) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_opt("filter[name]", filters.filter_name.as_deref())
        .push_joined("filter[ids]", &filters.filter_ids)
        .push_opt("page", filters.page);
    params
}

/// List browser applications.
pub async fn list_browser_applications(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filters: &NamedListParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        "browser_applications.json",
        api_key,
        &named_list_params(filters),
        metrics,
    )
    .await
}

/// Create a standalone browser application.
pub async fn create_browser_application(
    client: &Client,
    base_url: &str,
    api_key: &str,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::post(
        client,
        base_url,
        "browser_applications.json",
        api_key,
        &QueryParams::new(),
        &BrowserApplicationEnvelope {
            browser_application: BrowserApplicationBody { name },
        },
        metrics,
    )
    .await
}
