//! Browser application facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::NamedListParams;

/// Operations on `browser_applications.json`.
pub struct BrowserApplications<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Browser applications.
    pub fn browser_applications(&self) -> BrowserApplications<'_> {
        BrowserApplications { client: self }
    }
}

impl BrowserApplications<'_> {
    pub async fn list(&self, filters: &NamedListParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::browser_applications::list_browser_applications(
            &c.http,
            &c.base_url,
            c.api_key(),
            filters,
            c.metrics(),
        )
        .await
    }

    pub async fn create(&self, name: &str) -> Result<Envelope> {
        let c = self.client;
        endpoints::browser_applications::create_browser_application(
            &c.http,
            &c.base_url,
            c.api_key(),
            name,
            c.metrics(),
        )
        .await
    }
}
