//! Server facade.
//!
//! # What this module handles:
//! - Listing servers, including `Category:Name` label filters
//! - Showing and deleting servers
//! - Merge-update of the server name
//! - Server metric names and data

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::{MetricDataQuery, MetricNamesQuery, ServerListParams, ServerUpdate};

/// Operations on `servers.json`.
pub struct Servers<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Servers reporting through the legacy server monitor.
    pub fn servers(&self) -> Servers<'_> {
        Servers { client: self }
    }
}

impl Servers<'_> {
    pub async fn list(&self, filters: &ServerListParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::servers::list_servers(&c.http, &c.base_url, c.api_key(), filters, c.metrics())
            .await
    }

    pub async fn show(&self, server_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::servers::get_server(&c.http, &c.base_url, c.api_key(), server_id, c.metrics())
            .await
    }

    /// Rename a server; `None` keeps the current name.
    pub async fn update(&self, server_id: u64, update: ServerUpdate) -> Result<Envelope> {
        let c = self.client;
        endpoints::servers::update_server(
            &c.http,
            &c.base_url,
            c.api_key(),
            server_id,
            update,
            c.metrics(),
        )
        .await
    }

    pub async fn delete(&self, server_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::servers::delete_server(
            &c.http,
            &c.base_url,
            c.api_key(),
            server_id,
            c.metrics(),
        )
        .await
    }

    pub async fn metric_names(&self, server_id: u64, query: &MetricNamesQuery) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_names(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::servers::metrics_prefix(server_id),
            query,
            c.metrics(),
        )
        .await
    }

    pub async fn metric_data(&self, server_id: u64, query: &MetricDataQuery) -> Result<Envelope> {
        let c = self.client;
        endpoints::get_metric_data(
            &c.http,
            &c.base_url,
            c.api_key(),
            &endpoints::servers::metrics_prefix(server_id),
            query,
            c.metrics(),
        )
        .await
    }
}
