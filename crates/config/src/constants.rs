//! Centralized constants for the New Relic API workspace.
//!
//! Default values used across crates, kept here to avoid magic number
//! duplication.

// =============================================================================
// Endpoints
// =============================================================================

/// Default base URL of the REST API v2.
pub const DEFAULT_BASE_URL: &str = "https://api.newrelic.com/v2/";

/// Default base URL of the Infrastructure alerts API.
pub const DEFAULT_INFRA_BASE_URL: &str = "https://infra-api.newrelic.com/v2/";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "NEWRELIC_API_KEY";

/// Environment variable overriding the REST API base URL.
pub const ENV_BASE_URL: &str = "NEWRELIC_BASE_URL";

/// Environment variable overriding the Infrastructure API base URL.
pub const ENV_INFRA_BASE_URL: &str = "NEWRELIC_INFRA_BASE_URL";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT: &str = "NEWRELIC_TIMEOUT";

/// Environment variable selecting a profile from the profiles file.
pub const ENV_PROFILE: &str = "NEWRELIC_PROFILE";

/// Environment variable overriding the profiles file location.
pub const ENV_CONFIG_PATH: &str = "NEWRELIC_CONFIG_PATH";

/// Environment variable that disables `.env` loading when `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
