//! Application models used by the merge-update of `applications/{id}.json`.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{opt_f64_from_string_or_number, u64_from_string_or_number};

/// Apdex and real-user-monitoring settings of an application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSettings {
    #[serde(
        default,
        deserialize_with = "opt_f64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub app_apdex_threshold: Option<f64>,
    #[serde(
        default,
        deserialize_with = "opt_f64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_user_apdex_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_real_user_monitoring: Option<bool>,
}

/// An application as returned by `applications/{id}.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Application {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub settings: ApplicationSettings,
}

/// Fields to change on an application. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ApplicationUpdate {
    pub name: Option<String>,
    pub app_apdex_threshold: Option<f64>,
    pub end_user_apdex_threshold: Option<f64>,
    pub enable_real_user_monitoring: Option<bool>,
}

/// Write body for `PUT applications/{id}.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationBody {
    pub name: String,
    pub settings: ApplicationSettings,
}

#[derive(Serialize)]
pub(crate) struct ApplicationEnvelope<'a> {
    pub application: &'a ApplicationBody,
}

impl ApplicationBody {
    /// Overlay `update` onto the fetched application.
    pub fn merge(existing: Application, update: ApplicationUpdate) -> Self {
        let current = existing.settings;
        Self {
            name: update.name.unwrap_or(existing.name),
            settings: ApplicationSettings {
                app_apdex_threshold: update.app_apdex_threshold.or(current.app_apdex_threshold),
                end_user_apdex_threshold: update
                    .end_user_apdex_threshold
                    .or(current.end_user_apdex_threshold),
                enable_real_user_monitoring: update
                    .enable_real_user_monitoring
                    .or(current.enable_real_user_monitoring),
            },
        }
    }
}
