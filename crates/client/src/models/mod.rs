//! Data models for New Relic API requests and merge-update records.
//!
//! Responses are returned to callers as untyped envelopes; the typed models
//! here cover request parameters and the records that merge-updates read
//! back before writing.

pub mod alert_conditions;
pub mod applications;
pub mod metric_query;
pub mod nrql_conditions;
pub mod params;
pub mod servers;

pub use alert_conditions::{
    AlertCondition, AlertConditionBody, AlertConditionUpdate, AlertTerm, USER_DEFINED_METRIC,
    UserDefined,
};
pub use applications::{Application, ApplicationBody, ApplicationSettings, ApplicationUpdate};
pub use metric_query::{MetricDataQuery, MetricNamesQuery};
pub use nrql_conditions::{
    Nrql, NrqlCondition, NrqlConditionBody, NrqlConditionUpdate, OUTLIER_THRESHOLD,
    STATIC_THRESHOLD,
};
pub use params::{
    AlertPolicyParams, AlertViolationListParams, ApplicationHostListParams, ApplicationListParams,
    ComponentListParams, DashboardListParams, DeploymentParams, IncidentPreference,
    InfraConditionParams, LabelParams, NamedListParams, NotificationChannelParams,
    PluginListParams, ServerListParams, UserListParams,
};
pub use servers::{Server, ServerBody, ServerUpdate};
