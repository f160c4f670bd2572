//! Request parameter types for list filters and create bodies.
//!
//! Every filter is optional; absent filters are left out of the query string.
//! Id lists are sent comma-joined and are omitted when empty.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Filters for `applications.json`.
#[derive(Debug, Clone, Default)]
pub struct ApplicationListParams {
    pub filter_name: Option<String>,
    pub filter_ids: Vec<u64>,
    pub filter_language: Vec<String>,
    pub page: Option<u32>,
}

/// Filters for `applications/{id}/hosts.json` and `applications/{id}/instances.json`.
#[derive(Debug, Clone, Default)]
pub struct ApplicationHostListParams {
    pub filter_hostname: Option<String>,
    pub filter_ids: Vec<u64>,
    pub page: Option<u32>,
}

/// Name/id filters shared by browser applications and key transactions.
#[derive(Debug, Clone, Default)]
pub struct NamedListParams {
    pub filter_name: Option<String>,
    pub filter_ids: Vec<u64>,
    pub page: Option<u32>,
}

/// Filters for `components.json`.
#[derive(Debug, Clone, Default)]
pub struct ComponentListParams {
    pub filter_name: Option<String>,
    pub filter_ids: Vec<u64>,
    pub filter_plugin_id: Option<u64>,
    pub page: Option<u32>,
}

/// Filters for `dashboards.json`.
#[derive(Debug, Clone, Default)]
pub struct DashboardListParams {
    pub filter_title: Option<String>,
    pub filter_ids: Vec<u64>,
    pub page: Option<u32>,
}

/// Filters for `plugins.json`.
#[derive(Debug, Clone, Default)]
pub struct PluginListParams {
    pub filter_guid: Option<String>,
    pub filter_ids: Vec<u64>,
    pub detailed: Option<bool>,
    pub page: Option<u32>,
}

/// Filters for `servers.json`.
///
/// Labels are sent as `filter[labels]=Category:Name;Category:Name`, ordered by category.
#[derive(Debug, Clone, Default)]
pub struct ServerListParams {
    pub filter_name: Option<String>,
    pub filter_ids: Vec<u64>,
    pub filter_labels: BTreeMap<String, String>,
    pub page: Option<u32>,
}

/// Filters for `users.json`.
#[derive(Debug, Clone, Default)]
pub struct UserListParams {
    pub filter_email: Option<String>,
    pub filter_ids: Vec<u64>,
    pub page: Option<u32>,
}

/// Filters for `alerts_violations.json`.
#[derive(Debug, Clone, Default)]
pub struct AlertViolationListParams {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub only_open: Option<bool>,
    pub page: Option<u32>,
}

/// How an alert policy groups violations into incidents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentPreference {
    PerPolicy,
    PerCondition,
    PerConditionAndTarget,
}

/// Body of `{"policy": {...}}` for create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertPolicyParams {
    pub name: String,
    pub incident_preference: IncidentPreference,
}

/// Body of `{"deployment": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeploymentParams {
    pub revision: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A label and the entities it is attached to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelParams {
    pub name: String,
    pub category: String,
    pub applications: Vec<u64>,
    pub servers: Vec<u64>,
}

/// Body of `{"channel": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationChannelParams {
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: String,
    pub configuration: Value,
}

/// An infrastructure alert condition.
///
/// `configuration` carries the type-specific fields (`event_type`,
/// `select_value`, `comparison`, `critical_threshold`, ...); `type`,
/// `policy_id`, `name` and `enabled` are written over it.
#[derive(Debug, Clone, PartialEq)]
pub struct InfraConditionParams {
    pub policy_id: u64,
    pub name: String,
    pub condition_type: String,
    pub configuration: Map<String, Value>,
    pub enabled: bool,
}

impl InfraConditionParams {
    /// Render the `{"data": {...}}` body.
    pub(crate) fn to_body(&self) -> Value {
        let mut data = self.configuration.clone();
        data.insert("type".to_string(), Value::String(self.condition_type.clone()));
        data.insert("policy_id".to_string(), Value::from(self.policy_id));
        data.insert("name".to_string(), Value::String(self.name.clone()));
        data.insert("enabled".to_string(), Value::Bool(self.enabled));

        let mut body = Map::new();
        body.insert("data".to_string(), Value::Object(data));
        Value::Object(body)
    }
}
