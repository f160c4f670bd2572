//! Plugin endpoints (`plugins.json`).

use reqwest::Client;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::PluginListParams;

fn list_params(filters: &PluginListParams) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push_opt("filter[guid]", filters.filter_guid.as_deref())
        .push_joined("filter[ids]", &filters.filter_ids)
        .push_opt("detailed", filters.detailed)
        .push_opt("page", filters.page);
    params
}

/// List plugins.
pub async fn list_plugins(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filters: &PluginListParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::get(
        client,
        base_url,
        "plugins.json",
        api_key,
        &list_params(filters),
        metrics,
    )
    .await
}

/// Show one plugin, optionally with its detailed metadata.
pub async fn get_plugin(
    client: &Client,
    base_url: &str,
    api_key: &str,
    plugin_id: u64,
    detailed: Option<bool>,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let mut params = QueryParams::new();
    params.push_opt("detailed", detailed);

    request::get(
        client,
        base_url,
        &format!("plugins/{}.json", plugin_id),
        api_key,
        &params,
        metrics,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detailed_is_lowercase() {
        let filters = PluginListParams {
            filter_guid: Some("com.example.redis".to_string()),
            detailed: Some(false),
            ..Default::default()
        };
        assert_eq!(
            list_params(&filters).encode(),
            "filter[guid]=com.example.redis&detailed=false"
        );
    }
}
