//! NRQL alert condition models.
//!
//! Responsibilities:
//! - Deserialize conditions from `alerts_nrql_conditions.json` list responses.
//! - Build the `{"nrql_condition": {...}}` write body for create and merged update.
//! - Apply the threshold-type companion rules:
//!   `static` needs `value_function` and drops `expected_groups`/`ignore_overlap`;
//!   `outlier` needs `expected_groups` and `ignore_overlap` and drops `value_function`.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::models::alert_conditions::AlertTerm;
use crate::serde_helpers::{
    opt_u64_from_string_or_number, string_from_number_or_string, u64_from_string_or_number,
};

pub const STATIC_THRESHOLD: &str = "static";
pub const OUTLIER_THRESHOLD: &str = "outlier";

/// The NRQL query and its evaluation offset (minutes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nrql {
    pub query: String,
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub since_value: String,
}

/// A NRQL alert condition as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NrqlCondition {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    #[serde(rename = "type")]
    pub threshold_type: String,
    pub name: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub terms: Vec<AlertTerm>,
    pub nrql: Nrql,
    #[serde(default)]
    pub runbook_url: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_string_or_number")]
    pub expected_groups: Option<u64>,
    #[serde(default)]
    pub ignore_overlap: Option<bool>,
    #[serde(default)]
    pub value_function: Option<String>,
}

fn enabled_default() -> bool {
    true
}

/// Write body for creating or updating a NRQL condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NrqlConditionBody {
    #[serde(rename = "type")]
    pub threshold_type: String,
    pub name: String,
    pub enabled: bool,
    pub terms: Vec<AlertTerm>,
    pub nrql: Nrql,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runbook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_groups: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_overlap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_function: Option<String>,
}

/// Fields to change on an existing NRQL condition. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct NrqlConditionUpdate {
    pub name: Option<String>,
    pub threshold_type: Option<String>,
    pub query: Option<String>,
    pub since_value: Option<String>,
    pub terms: Option<Vec<AlertTerm>>,
    pub expected_groups: Option<u64>,
    pub value_function: Option<String>,
    pub runbook_url: Option<String>,
    pub ignore_overlap: Option<bool>,
    pub enabled: Option<bool>,
}

#[derive(Serialize)]
pub(crate) struct NrqlConditionEnvelope<'a> {
    pub nrql_condition: &'a NrqlConditionBody,
}

impl NrqlConditionBody {
    /// Overlay `update` onto the fetched condition.
    pub fn merge(existing: NrqlCondition, update: NrqlConditionUpdate) -> Self {
        Self {
            threshold_type: update.threshold_type.unwrap_or(existing.threshold_type),
            name: update.name.unwrap_or(existing.name),
            enabled: update.enabled.unwrap_or(existing.enabled),
            terms: update.terms.unwrap_or(existing.terms),
            nrql: Nrql {
                query: update.query.unwrap_or(existing.nrql.query),
                since_value: update.since_value.unwrap_or(existing.nrql.since_value),
            },
            runbook_url: update.runbook_url.or(existing.runbook_url),
            expected_groups: update.expected_groups.or(existing.expected_groups),
            ignore_overlap: update.ignore_overlap.or(existing.ignore_overlap),
            value_function: update.value_function.or(existing.value_function),
        }
    }

    /// Check the companion fields for the threshold type and drop the ones
    /// that do not apply to it.
    pub fn normalize(&mut self) -> Result<()> {
        match self.threshold_type.as_str() {
            STATIC_THRESHOLD => {
                if self.value_function.is_none() {
                    return Err(ClientError::Configuration(
                        "Alert is set as static but no value_function config specified"
                            .to_string(),
                    ));
                }
                self.expected_groups = None;
                self.ignore_overlap = None;
            }
            OUTLIER_THRESHOLD => {
                if self.expected_groups.is_none() {
                    return Err(ClientError::Configuration(
                        "Alert is set as outlier but expected_groups config is not specified"
                            .to_string(),
                    ));
                }
                if self.ignore_overlap.is_none() {
                    return Err(ClientError::Configuration(
                        "Alert is set as outlier but ignore_overlap config is not specified"
                            .to_string(),
                    ));
                }
                self.value_function = None;
            }
            _ => {}
        }
        Ok(())
    }
}
