//! New Relic REST API v2 client.
//!
//! This crate maps the resource-oriented endpoints of the New Relic REST API
//! (applications, servers, alert policies and conditions, dashboards,
//! notification channels, plugins, labels, users) onto async method calls.
//! Responses come back as decoded JSON [`Envelope`]s; list responses carry a
//! `pages` entry when the API paginates.
//!
//! ```no_run
//! # async fn run() -> newrelic_client::Result<()> {
//! use newrelic_client::NewRelicClient;
//! use newrelic_client::models::ApplicationListParams;
//!
//! let client = NewRelicClient::builder().api_key("NRRA-xxxx").build()?;
//! let apps = client
//!     .applications()
//!     .list(&ApplicationListParams {
//!         filter_name: Some("checkout".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{:?}", apps.get("applications"));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod metrics;
pub mod models;
mod serde_helpers;

pub mod endpoints;

pub use client::NewRelicClient;
pub use client::builder::NewRelicClientBuilder;
pub use endpoints::Envelope;
pub use error::{ClientError, ErrorKind, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
