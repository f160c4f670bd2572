//! Key transaction endpoints (`key_transactions.json`).

use reqwest::Client;

use crate::endpoints::browser_applications::named_list_params;
use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::NamedListParams;

/// List key transactions.
pub async fn list_key_transactions(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filters: &NamedListParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        "key_transactions.json",
        api_key,
        &named_list_params(filters),
        metrics,
    )
    .await
}

/// Show one key transaction.
pub async fn get_key_transaction(
    client: &Client,
    base_url: &str,
    api_key: &str,
    key_transaction_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        &format!("key_transactions/{}.json", key_transaction_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
