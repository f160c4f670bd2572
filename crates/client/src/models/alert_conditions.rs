//! APM/server alert condition models.
//!
//! Responsibilities:
//! - Deserialize conditions from `alerts_conditions.json` list responses.
//! - Build the `{"condition": {...}}` write body, including the merged body for updates.
//! - Enforce the `user_defined` companion-field rule before any write.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::serde_helpers::{
    string_from_number_or_string, u64_from_string_or_number, vec_u64_from_strings_or_numbers,
};

/// Metric sentinel that requires a [`UserDefined`] companion block.
pub const USER_DEFINED_METRIC: &str = "user_defined";

/// One threshold term of an alert condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertTerm {
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub duration: String,
    pub operator: String,
    pub priority: String,
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub threshold: String,
    pub time_function: String,
}

/// Custom metric definition used when `metric` is `user_defined`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDefined {
    pub metric: String,
    pub value_function: String,
}

/// An alert condition as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlertCondition {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    #[serde(rename = "type", alias = "condition_type")]
    pub condition_type: String,
    pub name: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "vec_u64_from_strings_or_numbers")]
    pub entities: Vec<u64>,
    pub metric: String,
    #[serde(default)]
    pub terms: Vec<AlertTerm>,
    #[serde(default)]
    pub condition_scope: Option<String>,
    #[serde(default)]
    pub runbook_url: Option<String>,
    #[serde(default)]
    pub user_defined: Option<UserDefined>,
}

fn enabled_default() -> bool {
    true
}

/// Write body for creating or updating an alert condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertConditionBody {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub name: String,
    pub enabled: bool,
    pub entities: Vec<u64>,
    pub metric: String,
    pub terms: Vec<AlertTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runbook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_defined: Option<UserDefined>,
}

/// Fields to change on an existing alert condition. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct AlertConditionUpdate {
    pub condition_type: Option<String>,
    pub condition_scope: Option<String>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub entities: Option<Vec<u64>>,
    pub metric: Option<String>,
    pub runbook_url: Option<String>,
    pub terms: Option<Vec<AlertTerm>>,
    pub user_defined: Option<UserDefined>,
}

#[derive(Serialize)]
pub(crate) struct AlertConditionEnvelope<'a> {
    pub condition: &'a AlertConditionBody,
}

impl AlertConditionBody {
    /// Overlay `update` onto the fetched condition.
    pub fn merge(existing: AlertCondition, update: AlertConditionUpdate) -> Self {
        Self {
            condition_type: update.condition_type.unwrap_or(existing.condition_type),
            name: update.name.unwrap_or(existing.name),
            enabled: update.enabled.unwrap_or(existing.enabled),
            entities: update.entities.unwrap_or(existing.entities),
            metric: update.metric.unwrap_or(existing.metric),
            terms: update.terms.unwrap_or(existing.terms),
            condition_scope: update.condition_scope.or(existing.condition_scope),
            runbook_url: update.runbook_url.or(existing.runbook_url),
            user_defined: update.user_defined.or(existing.user_defined),
        }
    }

    /// Reject a `user_defined` metric without its companion block.
    pub fn validate(&self) -> Result<()> {
        if self.metric == USER_DEFINED_METRIC && self.user_defined.is_none() {
            return Err(ClientError::Configuration(
                "Metric is set as user_defined but no user_defined config specified".to_string(),
            ));
        }
        Ok(())
    }
}
