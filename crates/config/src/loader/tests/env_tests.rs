//! Environment variable tests for the configuration loader.

use crate::loader::ConfigError;
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::{env_lock, env_with};

fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    temp_env::with_vars(env_with(vars), f);
}

#[test]
#[serial]
fn test_api_key_from_env() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("NEWRELIC_API_KEY", Some("env-key"))], || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        assert_eq!(config.api_key.expose_secret(), "env-key");
    });
}

#[test]
#[serial]
fn test_missing_env_api_key_fails() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[], || {
        let result = ConfigLoader::new().from_env().unwrap().build();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    });
}

#[test]
#[serial]
fn test_builder_value_beats_env() {
    let _lock = env_lock().lock().unwrap();

    with_env(
        &[
            ("NEWRELIC_API_KEY", Some("env-key")),
            ("NEWRELIC_BASE_URL", Some("https://env.example.com/v2")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_api_key("explicit-key".to_string())
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.api_key.expose_secret(), "explicit-key");
            assert_eq!(config.connection.base_url, "https://env.example.com/v2/");
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("NEWRELIC_API_KEY", Some("")), ("NEWRELIC_BASE_URL", Some("   "))], || {
        let result = ConfigLoader::new().from_env().unwrap().build();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    });
}

#[test]
#[serial]
fn test_env_timeout_parsed() {
    let _lock = env_lock().lock().unwrap();

    with_env(
        &[("NEWRELIC_API_KEY", Some("k")), ("NEWRELIC_TIMEOUT", Some("90"))],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.timeout, Duration::from_secs(90));
        },
    );
}

#[test]
#[serial]
fn test_env_timeout_not_a_number() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("NEWRELIC_TIMEOUT", Some("soon"))], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "NEWRELIC_TIMEOUT"),
            other => panic!("Expected InvalidValue, got {:?}", other.map(|_| ())),
        }
    });
}

#[test]
#[serial]
fn test_whitespace_only_env_var_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("NEWRELIC_TEST_WHITESPACE", Some("  \t "), || {
        assert_eq!(env_var_or_none("NEWRELIC_TEST_WHITESPACE"), None);
    });
}

#[test]
#[serial]
fn test_env_values_are_trimmed() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("NEWRELIC_TEST_TRIM", Some("  value "), || {
        assert_eq!(
            env_var_or_none("NEWRELIC_TEST_TRIM"),
            Some("value".to_string())
        );
    });
}
