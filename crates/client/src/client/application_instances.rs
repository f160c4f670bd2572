//! Application instance facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::{ApplicationHostListParams, MetricDataQuery, MetricNamesQuery};

/// Operations on `applications/{app}/instances.json`.
pub struct ApplicationInstances<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Agent instances of an APM application.
    pub fn application_instances(&self) -> ApplicationInstances<'_> {
        ApplicationInstances { client: self }
    }
}

impl ApplicationInstances<'_> {
    pub async fn list(
        &self,
        application_id: u64,
        filters: &ApplicationHostListParams,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::application_instances::list_application_instances(
            &c.http,
            &c.base_url,
            c.api_key(),
            application_id,
            filters,
            c.metrics(),
        )
        .await
    }

    pub async fn show(&self, application_id: u64, instance_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::application_instances::get_application_instance(
            &c.http,
            &c.base_url,
            c.api_key(),
            application_id,
            instance_id,
            c.metrics(),
        )
        .await
    }

    pub async fn metric_names(
        &self,
        application_id: u64,
        instance_id: u64,
        query: &MetricNamesQuery,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_names(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::application_instances::metrics_prefix(application_id, instance_id),
            query,
            c.metrics(),
        )
        .await
    }

    pub async fn metric_data(
        &self,
        application_id: u64,
        instance_id: u64,
        query: &MetricDataQuery,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_data(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::application_instances::metrics_prefix(application_id, instance_id),
            query,
            c.metrics(),
        )
        .await
    }
}
