//! Alert notification channel endpoints (`alerts_channels.json`).

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::query::QueryParams;
use crate::endpoints::request::{self, Envelope};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::NotificationChannelParams;

#[derive(Serialize)]
struct ChannelEnvelope<'a> {
    channel: &'a NotificationChannelParams,
}

/// List notification channels.
pub async fn list_notification_channels(
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
        "alerts_channels.json",
        api_key,
        &params,
        metrics,
    )
    .await
}

/// Create a notification channel.
pub async fn create_notification_channel(
    client: &Client,
    base_url: &str,
    api_key: &str,
    channel: &NotificationChannelParams,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::post(
        client,
        base_url,
        "alerts_channels.json",
        api_key,
        &QueryParams::new(),
        &ChannelEnvelope { channel },
        metrics,
    )
    .await
}

/// Delete a notification channel.
pub async fn delete_notification_channel(
    client: &Client,
    base_url: &str,
    api_key: &str,
    channel_id: u64,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    request::delete(
        client,
        base_url,
        &format!("alerts_channels/{}.json", channel_id),
        api_key,
        &QueryParams::new(),
        metrics,
    )
    .await
}
