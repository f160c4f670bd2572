//! Server endpoints (`servers.json`).
//!
//! Responsibilities:
//! - List (with label filters), show and delete servers.
//! - Merge-update of the server name.

use reqwest::Client;

use crate::endpoints::merge::take_entity;
use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::servers::ServerEnvelope;
use crate::models::{Server, ServerBody, ServerListParams, ServerUpdate};

/// Render label filters as `Category:Name;Category:Name`, ordered by category.
fn labels_filter(filters: &ServerListParams) -> Option<String> {
    if filters.filter_labels.is_empty() {
        return None;
    }
    Some(
        filters
            .filter_labels
            .iter()
            .map(|(category, name)| format!("{}:{}", category, name))
            .collect::<Vec<_>>()
            .join(";"),
    )
}

fn list_params(filters: &ServerListParams) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_opt("filter[name]", filters.filter_name.as_deref())
        .push_joined("filter[ids]", &filters.filter_ids)
        .push_opt("filter[labels]", labels_filter(filters))
        .push_opt("page", filters.page);
    params
}

/// Path prefix for a server's metric endpoints.
pub fn metrics_prefix(server_id: u64) -> String {
    format!("servers/{}", server_id)
}

/// List servers.
pub async fn list_servers(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filters: &ServerListParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        "servers.json",
        api_key,
        &list_params(filters),
        metrics,
    )
    .await
}

/// Show one server.
pub async fn get_server(
    client: &Client,
    base_url: &str,
    api_key: &str,
    server_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        &format!("servers/{}.json", server_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}

/// Update a server, keeping its name when the caller leaves it as `None`.
pub async fn update_server(
    client: &Client,
    base_url: &str,
    api_key: &str,
    server_id: u64,
    update: ServerUpdate,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let current = get_server(client, base_url, api_key, server_id, metrics).await?;
    let existing: Server = take_entity(current, "server")?;
    let server = ServerBody::merge(existing, update);

    request::put(
        client,
        base_url,
        &format!("servers/{}.json", server_id),
        api_key,
        &QueryParams::new(),
        Some(&ServerEnvelope { server: &server }),
        metrics,
    )
    .await
}

/// Delete a server that has stopped reporting.
pub async fn delete_server(
    client: &Client,
    base_url: &str,
    api_key: &str,
    server_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::delete(
        client,
        base_url,
        &format!("servers/{}.json", server_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_sorted_by_category() {
        let mut filters = ServerListParams::default();
        filters
            .filter_labels
            .insert("Team".to_string(), "web".to_string());
        filters
            .filter_labels
            .insert("Environment".to_string(), "prod".to_string());

        assert_eq!(
            list_params(&filters).encode(),
            "filter[labels]=Environment:prod;Team:web"
        );
    }

    #[test]
    fn test_no_labels_no_filter() {
        let filters = ServerListParams {
            filter_name: Some("db".to_string()),
            ..Default::default()
        };
        assert_eq!(list_params(&filters).encode(), "filter[name]=db");
    }
}
