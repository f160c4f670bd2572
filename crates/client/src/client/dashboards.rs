//! Insights dashboard facade.

use serde_json::Value;

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::DashboardListParams;

/// Operations on `dashboards.json`.
pub struct Dashboards<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Insights dashboards.
    pub fn dashboards(&self) -> Dashboards<'_> {
        Dashboards { client: self }
    }
}

impl Dashboards<'_> {
    pub async fn list(&self, filters: &DashboardListParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::dashboards::list_dashboards(
            &c.http,
            &c.base_url,
            c.api_key(),
            filters,
            c.metrics(),
        )
        .await
    }

    pub async fn show(&self, dashboard_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::dashboards::get_dashboard(
            &c.http,
            &c.base_url,
            c.api_key(),
            dashboard_id,
            c.metrics(),
        )
        .await
    }

    /// Create a dashboard. `document` is the full `{"dashboard": {...}}` body.
    pub async fn create(&self, document: &Value) -> Result<Envelope> {
        let c = self.client;
        endpoints::dashboards::create_dashboard(
            &c.http,
            &c.base_url,
            c.api_key(),
            document,
            c.metrics(),
        )
        .await
    }

    /// Replace a dashboard. `document` is the full `{"dashboard": {...}}` body.
    pub async fn update(&self, dashboard_id: u64, document: &Value) -> Result<Envelope> {
        let c = self.client;
        endpoints::dashboards::update_dashboard(
            &c.http,
            &c.base_url,
            c.api_key(),
            dashboard_id,
            document,
            c.metrics(),
        )
        .await
    }

    pub async fn delete(&self, dashboard_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::dashboards::delete_dashboard(
            &c.http,
            &c.base_url,
            c.api_key(),
            dashboard_id,
            c.metrics(),
        )
        .await
    }
}
