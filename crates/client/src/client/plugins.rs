//! Plugin facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::PluginListParams;

/// Operations on `plugins.json`.
pub struct Plugins<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Plugins.
    pub fn plugins(&self) -> Plugins<'_> {
        Plugins { client: self }
    }
}

impl Plugins<'_> {
    pub async fn list(&self, filters: &PluginListParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::plugins::list_plugins(&c.http, &c.base_url, c.api_key(), filters, c.metrics())
            .await
    }

    pub async fn show(&self, plugin_id: u64, detailed: Option<bool>) -> Result<Envelope> {
        let c = self.client;
        endpoints::plugins::get_plugin(
            &c.http,
            &c.base_url,
            c.api_key(),
            plugin_id,
            detailed,
            c.metrics(),
        )
        .await
    }
}
