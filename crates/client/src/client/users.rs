//! Account user facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::UserListParams;

/// Operations on `users.json`.
pub struct Users<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Account users.
    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }
}

impl Users<'_> {
    pub async fn list(&self, filters: &UserListParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::users::list_users(&c.http, &c.base_url, c.api_key(), filters, c.metrics()).await
    }

    pub async fn show(&self, user_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::users::get_user(&c.http, &c.base_url, c.api_key(), user_id, c.metrics()).await
    }
}
