//! Label facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::LabelParams;

/// Operations on `labels.json`.
pub struct Labels<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Labels attached to applications and servers.
    pub fn labels(&self) -> Labels<'_> {
        Labels { client: self }
    }
}

impl Labels<'_> {
    pub async fn list(&self, page: Option<u32>) -> Result<Envelope> {
        let c = self.client;
        endpoints::labels::list_labels(&c.http, &c.base_url, c.api_key(), page, c.metrics()).await
    }

    /// Create a label and link it to the given applications and servers.
    pub async fn create(&self, label: &LabelParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::labels::create_label(&c.http, &c.base_url, c.api_key(), label, c.metrics())
            .await
    }

    /// Delete a label by its `Category:Name` key.
    pub async fn delete(&self, key: &str) -> Result<Envelope> {
        let c = self.client;
        endpoints::labels::delete_label(&c.http, &c.base_url, c.api_key(), key, c.metrics()).await
    }
}
