//! Plugin component facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::{ComponentListParams, MetricDataQuery, MetricNamesQuery};

/// Operations on `components.json`.
pub struct Components<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Plugin components.
    pub fn components(&self) -> Components<'_> {
        Components { client: self }
    }
}

impl Components<'_> {
    pub async fn list(&self, filters: &ComponentListParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::components::list_components(
            &c.http,
            &c.base_url,
            c.api_key(),
            filters,
            c.metrics(),
        )
        .await
    }

    pub async fn show(&self, component_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::components::get_component(
            &c.http,
            &c.base_url,
            c.api_key(),
            component_id,
            c.metrics(),
        )
        .await
    }

    pub async fn metric_names(
        &self,
        component_id: u64,
        query: &MetricNamesQuery,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_names(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::components::metrics_prefix(component_id),
            query,
            c.metrics(),
        )
        .await
    }

    pub async fn metric_data(&self, component_id: u64, query: &MetricDataQuery) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_data(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::components::metrics_prefix(component_id),
            query,
            c.metrics(),
        )
        .await
    }
}
