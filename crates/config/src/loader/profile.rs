//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Resolve the profiles file location (explicit path, env override, or platform default).
//! - Load a named profile and apply it to a ConfigLoader instance.
//!
//! Invariants:
//! - Profile values have the lowest precedence.
//! - A missing file or missing profile is recorded, not raised; `build()` decides.

use std::path::{Path, PathBuf};

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::ProfilesFile;

/// Returns the default path to the profiles file.
///
/// - Linux/macOS: `~/.config/newrelic-api/config.json`
/// - Windows: `%AppData%\newrelic-api\config.json`
pub(crate) fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "newrelic-api")
        .ok_or(ConfigError::ConfigDirUnavailable)?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

/// Read and parse a profiles file.
pub(crate) fn read_profiles_file(path: &Path) -> Result<ProfilesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
    })?;

    serde_json::from_str(&content).map_err(|_| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
    })
}

/// Apply the selected profile to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = match loader.config_path() {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Profiles file not found");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = read_profiles_file(&config_path)?;

    match file.profiles.get(&profile_name) {
        Some(profile) => {
            tracing::debug!(profile = %profile_name, "Applying profile");
            loader.set_profile_values(profile.clone());
        }
        None => loader.set_profile_missing(Some(profile_name)),
    }

    Ok(())
}
