//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared for hermetic tests.
pub const CLEARED_VARS: [(&str, Option<&str>); 6] = [
    ("NEWRELIC_API_KEY", None),
    ("NEWRELIC_BASE_URL", None),
    ("NEWRELIC_INFRA_BASE_URL", None),
    ("NEWRELIC_TIMEOUT", None),
    ("NEWRELIC_PROFILE", None),
    ("NEWRELIC_CONFIG_PATH", None),
];

/// `CLEARED_VARS` with the given variables set, each key appearing once.
pub fn env_with<'a>(overrides: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut vars: Vec<(&str, Option<&str>)> = CLEARED_VARS
        .iter()
        .filter(|(k, _)| !overrides.iter().any(|(o, _)| o == k))
        .copied()
        .collect();
    vars.extend_from_slice(overrides);
    vars
}
