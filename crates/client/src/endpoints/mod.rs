//! REST API endpoint implementations.
//!
//! One module per resource family. Every function takes the shared HTTP
//! client, the base URL, the API key and an optional metrics collector, and
//! returns the decoded [`Envelope`].

pub mod alert_conditions;
pub mod alert_conditions_infra;
pub mod alert_conditions_nrql;
pub mod alert_policies;
pub mod alert_violations;
pub mod application_deployments;
pub mod application_hosts;
pub mod application_instances;
pub mod applications;
pub mod browser_applications;
pub mod components;
pub mod dashboards;
pub mod key_transactions;
pub mod labels;
pub(crate) mod merge;
pub mod metric_data;
pub mod mobile_applications;
pub mod notification_channels;
pub mod pagination;
pub mod plugins;
pub mod query;
pub mod request;
pub mod servers;
pub mod url_encoding;
pub mod users;

pub use metric_data::{get_metric_data, get_metric_names};
pub use pagination::parse_link_header;
pub use query::{QueryParams, build_param_string};
pub use request::{API_KEY_HEADER, Envelope};
pub use url_encoding::encode_path_segment;
