//! Application host facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::{ApplicationHostListParams, MetricDataQuery, MetricNamesQuery};

/// Operations on `applications/{app}/hosts.json`.
pub struct ApplicationHosts<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Hosts running an APM application.
    pub fn application_hosts(&self) -> ApplicationHosts<'_> {
        ApplicationHosts { client: self }
    }
}

impl ApplicationHosts<'_> {
    pub async fn list(
        &self,
        application_id: u64,
        filters: &ApplicationHostListParams,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::application_hosts::list_application_hosts(
            &c.http,
            &c.base_url,
            c.api_key(),
            application_id,
            filters,
            c.metrics(),
        )
        .await
    }

    pub async fn show(&self, application_id: u64, host_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::application_hosts::get_application_host(
            &c.http,
            &c.base_url,
            c.api_key(),
            application_id,
            host_id,
            c.metrics(),
        )
        .await
    }

    pub async fn metric_names(
        &self,
        application_id: u64,
        host_id: u64,
        query: &MetricNamesQuery,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_names(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::application_hosts::metrics_prefix(application_id, host_id),
            query,
            c.metrics(),
        )
        .await
    }

    pub async fn metric_data(
        &self,
        application_id: u64,
        host_id: u64,
        query: &MetricDataQuery,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_data(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::application_hosts::metrics_prefix(application_id, host_id),
            query,
            c.metrics(),
        )
        .await
    }
}
