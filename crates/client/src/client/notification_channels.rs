//! Notification channel facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::NotificationChannelParams;

/// Operations on `alerts_channels.json`.
pub struct NotificationChannels<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Alert notification channels.
    pub fn notification_channels(&self) -> NotificationChannels<'_> {
        NotificationChannels { client: self }
    }
}

impl NotificationChannels<'_> {
    pub async fn list(&self, page: Option<u32>) -> Result<Envelope> {
        let c = self.client;
        endpoints::notification_channels::list_notification_channels(
            &c.http,
            &c.base_url,
            c.api_key(),
            page,
            c.metrics(),
        )
        .await
    }

    pub async fn create(&self, channel: &NotificationChannelParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::notification_channels::create_notification_channel(
            &c.http,
            &c.base_url,
            c.api_key(),
            channel,
            c.metrics(),
        )
        .await
    }

    pub async fn delete(&self, channel_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::notification_channels::delete_notification_channel(
            &c.http,
            &c.base_url,
            c.api_key(),
            channel_id,
            c.metrics(),
        )
        .await
    }
}
