//! Label endpoints (`labels.json`).
//!
//! Labels are addressed by their `Category:Name` key, which is
//! percent-encoded as a single path segment on delete.

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::LabelParams;

#[derive(Serialize)]
struct LabelEnvelope<'a> {
    label: LabelBody<'a>,
}

#[derive(Serialize)]
struct LabelBody<'a> {
    category: &'a str,
    name: &'a str,
    links: LabelLinks<'a>,
}

#[derive(Serialize)]
struct LabelLinks<'a> {
    applications: &'a [u64],
    servers: &'a [u64],
}

impl<'a> From<&'a LabelParams> for LabelEnvelope<'a> {
    fn from(params: &'a LabelParams) -> Self {
        Self {
            label: LabelBody {
                category: &params.category,
                name: &params.name,
                links: LabelLinks {
                    applications: &params.applications,
                    servers: &params.servers,
                },
            },
        }
    }
}

/// Relative path of a label, with the key encoded as one segment.
pub fn label_path(key: &str) -> String {
    format!("labels/{}.json", encode_path_segment(key))
}

/// List labels.
pub async fn list_labels(
    client: &Client,
    base_url: &str,
    api_key: &str,
    page: Option<u32>,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let mut params = QueryParams::new();
    params.push_opt("page", page);

    request::get(client, base_url, "labels.json", api_key, &params, metrics).await
}

/// Create a label, or add links to an existing one.
pub async fn create_label(
    client: &Client,
    base_url: &str,
    api_key: &str,
    label: &LabelParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::put(
        client,
        base_url,
        "labels.json",
        api_key,
        &QueryParams::new(),
        Some(&LabelEnvelope::from(label)),
        metrics,
    )
    .await
}

/// Delete a label by its `Category:Name` key.
pub async fn delete_label(
    client: &Client,
    base_url: &str,
    api_key: &str,
    key: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::delete(
        client,
        base_url,
        &label_path(key),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
