//! Account user endpoints (`users.json`).

use reqwest::Client;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::UserListParams;

fn list_params(filters: &UserListParams) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_opt("filter[email]", filters.filter_email.as_deref())
        .push_joined("filter[ids]", &filters.filter_ids)
        .push_opt("page", filters.page);
    params
}

/// List account users.
pub async fn list_users(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filters: &UserListParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        "users.json",
        api_key,
        &list_params(filters),
        metrics,
    )
    .await
}

/// Show one user.
pub async fn get_user(
    client: &Client,
    base_url: &str,
    api_key: &str,
    user_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        &format!("users/{}.json", user_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
