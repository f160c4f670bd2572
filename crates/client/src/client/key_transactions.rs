//! Key transaction facade.

use crate::client::NewRelicClient;
use crate::endpoints::{self, Envelope};
use crate::error::Result;
use crate::models::NamedListParams;

/// Operations on `key_transactions.json`.
pub struct KeyTransactions<'a> {
    client: &'a NewRelicClient,
}

impl NewRelicClient {
    /// Key transactions.
    pub fn key_transactions(&self) -> KeyTransactions<'_> {
        KeyTransactions { client: self }
    }
}

impl KeyTransactions<'_> {
    pub async fn list(&self, filters: &NamedListParams) -> Result<Envelope> {
        let c = self.client;
        endpoints::key_transactions::list_key_transactions(
            &c.http,
            &c.base_url,
            c.api_key(),
            filters,
            c.metrics(),
        )
        .await
    }

    pub async fn show(&self, key_transaction_id: u64) -> Result<Envelope> {
        let c = self.client;
        endpoints::key_transactions::get_key_transaction(
            &c.http,
            &c.base_url,
            c.api_key(),
            key_transaction_id,
            c.metrics(),
        )
        .await
    }
}
