//! Deployment marker facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::DeploymentParams;

/// Operations on `applications/{app}/deployments.json`.
pub struct ApplicationDeployments<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Deployment markers of an APM application.
    pub fn application_deployments(&self) -> ApplicationDeployments<'_> {
        ApplicationDeployments { client: self }
    }
}

impl ApplicationDeployments<'_> {
    pub async fn list(&self, application_id: u64, page: Option<u32>) -> Result<Envelope> {
        let c = self.client;
        endpoints::application_deployments::list_deployments(
            &c.http,
            &c.base_url,
            c.api_key(),
            application_id,
            page,
            c.metrics(),
        )
        .await
    }

    pub async fn create(
        &self,
        application_id: u64,
        deployment: &DeploymentParams,
    ) -> Result<Envelope> {
        let c = self.client;
        endpoints::application_deployments::create_deployment(
            &c.http,
            &c.base_url,
            c.api_key(),
            application_id,
            deployment,
            c.metrics(),
        )
        .await
    }

    pub async fn delete(&self, application_id: u64, deployment_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::application_deployments::delete_deployment(
            &c.http,
            &c.base_url,
            c.api_key(),
            application_id,
            deployment_id,
            c.metrics(),
        )
        .await
    }
}
