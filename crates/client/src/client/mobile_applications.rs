//! Mobile application facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::{MetricDataQuery, MetricNamesQuery};

/// Operations on `mobile_applications.json`.
pub struct MobileApplications<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Mobile applications.
    pub fn mobile_applications(&self) -> MobileApplications<'_> {
        MobileApplications { client: self }
    }
}

impl MobileApplications<'_> {
    pub async fn list(&self, page: Option<u32>) -> Result<Envelope> {
        let c = self.client;
        endpoints::mobile_applications::list_mobile_applications(
            &c.http,
            &c.base_url,
            c.api_key(),
            page,
            c.metrics(),
        )
        .await
    }

    pub async fn show(&self, mobile_application_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::mobile_applications::get_mobile_application(
            &c.http,
            &c.base_url,
            c.api_key(),
            mobile_application_id,
            c.metrics(),
        )
        .await
    }

    /// List metric names. `query.cursor` continues a previous listing.
    pub async fn metric_names(
        &self,
        mobile_application_id: u64,
        query: &MetricNamesQuery,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_names(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::mobile_applications::metrics_prefix(mobile_application_id),
            query,
            c.metrics(),
        )
        .await
    }

    /// Fetch metric timeslices. `query.period` sets the timeslice length.
    pub async fn metric_data(
        &self,
        mobile_application_id: u64,
        query: &MetricDataQuery,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_data(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::mobile_applications::metrics_prefix(mobile_application_id),
            query,
            c.metrics(),
        )
        .await
    }
}
