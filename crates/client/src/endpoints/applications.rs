//! APM application endpoints.
//!
//! Responsibilities:
//! - List, show and delete `applications/{id}.json`.
//! - Merge-update of name and settings: show the application, overlay the
//!   caller's fields, PUT the merged document.

use reqwest::Client;

use crate::endpoints::merge::take_entity;
use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::applications::ApplicationEnvelope;
use crate::models::{Application, ApplicationBody, ApplicationListParams, ApplicationUpdate};

fn list_params(filters: &ApplicationListParams) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_opt("filter[name]", filters.filter_name.as_deref())
        .push_joined("filter[language]", &filters.filter_language)
        .push_joined("filter[ids]", &filters.filter_ids)
        .push_opt("page", filters.page);
    params
}

/// Path prefix for an application's metric endpoints.
pub fn metrics_prefix(application_id: u64) -> String {
    format!("applications/{}", application_id)
}

/// List applications.
pub async fn list_applications(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filters: &ApplicationListParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        "applications.json",
        api_key,
        &list_params(filters),
        metrics,
    )
    .await
}

/// Show one application.
pub async fn get_application(
    client: &Client,
    base_url: &str,
    api_key: &str,
    application_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        &format!("applications/{}.json", application_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}

/// Update an application, keeping every field the caller leaves as `None`.
pub async fn update_application(
    client: &Client,
    base_url: &str,
    api_key: &str,
    application_id: u64,
    update: ApplicationUpdate,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let current = get_application(client, base_url, api_key, application_id, metrics).await?;
    let existing: Application = take_entity(current, "application")?;
    let application = ApplicationBody::merge(existing, update);

    request::put(
        client,
        base_url,
        &format!("applications/{}.json", application_id),
        api_key,
        &QueryParams::new(),
        Some(&ApplicationEnvelope {
            application: &application,
        }),
        metrics,
    )
    .await
}

/// Delete an application. The API only allows this for applications
/// that have stopped reporting.
pub async fn delete_application(
    client: &Client,
    base_url: &str,
    api_key: &str,
    application_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::delete(
        client,
        base_url,
        &format!("applications/{}.json", application_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
