//! Configuration management for the New Relic API client.
//!
//! This crate provides types and loaders for resolving the API key and
//! connection settings from explicit values, environment variables, `.env`
//! files, and JSON profile files. Environment lookup happens here and only
//! here; the client crate receives a finished [`Config`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig, ProfileConfig, ProfilesFile};
