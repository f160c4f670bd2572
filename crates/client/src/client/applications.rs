//! APM application facade.
//!
//! # What this module handles:
//! - Listing, showing and deleting applications
//! - Merge-update of name and Apdex/RUM settings
//! - Application-level metric names and data

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::{ApplicationListParams, ApplicationUpdate, MetricDataQuery, MetricNamesQuery};

/// Operations on `applications.json`.
pub struct Applications<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// APM applications.
    pub fn applications(&self) -> Applications<'_> {
        Applications { client: self }
    }
}

impl Applications<'_> {
    pub async fn list(&self, filters: &ApplicationListParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::applications::list_applications(
            &c.http,
            &c.base_url,
            c.api_key(),
            filters,
            c.metrics(),
        )
        .await
    }

    pub async fn show(&self, application_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::applications::get_application(
            &c.http,
            &c.base_url,
            c.api_key(),
            application_id,
            c.metrics(),
        )
        .await
    }

    /// Update an application, keeping every field left as `None`.
    ///
    /// The current application is fetched first and the merged document
    /// (name plus all three settings) is written back.
    pub async fn update(&self, application_id: u64, update: ApplicationUpdate) -> Result<Envelope> {
        let c = self.client;
        endpoints::applications::update_application(
            &c.http,
            &c.base_url,
            c.api_key(),
            application_id,
            update,
            c.metrics(),
        )
        .await
    }

    pub async fn delete(&self, application_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::applications::delete_application(
            &c.http,
            &c.base_url,
            c.api_key(),
            application_id,
            c.metrics(),
        )
        .await
    }

    pub async fn metric_names(
        &self,
        application_id: u64,
        query: &MetricNamesQuery,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_names(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::applications::metrics_prefix(application_id),
            query,
            c.metrics(),
        )
        .await
    }

    /// Fetch metric timeslices. `query.names` must not be empty.
    pub async fn metric_data(
        &self,
        application_id: u64,
        query: &MetricDataQuery,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_data(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::applications::metrics_prefix(application_id),
            query,
            c.metrics(),
        )
        .await
    }
}
