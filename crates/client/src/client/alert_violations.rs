//! Alert violation facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::AlertViolationListParams;

/// Operations on `alerts_violations.json`.
pub struct AlertViolations<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Alert violations.
    pub fn alert_violations(&self) -> AlertViolations<'_> {
        AlertViolations { client: self }
    }
}

impl AlertViolations<'_> {
    pub async fn list(&self, filters: &AlertViolationListParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::alert_violations::list_alert_violations(
            &c.http,
            &c.base_url,
            c.api_key(),
            filters,
            c.metrics(),
        )
        .await
    }
}
