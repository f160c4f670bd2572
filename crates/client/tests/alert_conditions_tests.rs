//! Alert condition endpoint tests.
//!
//! This module tests the APM/server alert condition API:
//! - Listing conditions of a policy
//! - Creating conditions, including the `user_defined` companion check
//! - Merge-update against the policy's condition list
//! - Deleting conditions
//!
//! # Invariants
//! - An update only sends a PUT after the target condition was found and
//!   the merged body validated
//! - Fields the caller leaves as `None` keep their fetched values

mod common;

use common::*;
use newrelic_client::models::{
    AlertConditionBody, AlertConditionUpdate, AlertTerm, USER_DEFINED_METRIC, UserDefined,
};
use wiremock::matchers::{header, method, path, query_param};

async fn mount_condition_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2/alerts_conditions.json"))
        .and(query_param("policy_id", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("alert_conditions/list_conditions.json")),
        )
        .mount(server)
        .await;
}

fn critical_term() -> AlertTerm {
    AlertTerm {
        duration: "5".to_string(),
        operator: "above".to_string(),
        priority: "critical".to_string(),
        threshold: "80".to_string(),
        time_function: "all".to_string(),
    }
}

#[tokio::test]
async fn test_update_overlays_only_supplied_fields() {
    let mock_server = MockServer::start().await;
    mount_condition_list(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/v2/alerts_conditions/100.json"))
        .and(header("X-Api-Key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "condition": {"id": 100, "name": "New Name"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .alert_conditions()
        .update(
            100,
            1,
            AlertConditionUpdate {
                name: Some("New Name".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_ok(), "update failed: {:?}", result.err());
    assert_eq!(result.unwrap()["condition"]["name"], "New Name");

    let puts = requests_with_method(&mock_server, "PUT").await;
    assert_eq!(puts.len(), 1);
    assert_eq!(
        body_json(&puts[0]),
        json!({
            "condition": {
                "type": "servers_metric",
                "name": "New Name",
                "enabled": true,
                "entities": [1234567],
                "metric": "cpu_percentage",
                "runbook_url": "http://example.com/runbook",
                "terms": [{
                    "duration": "5",
                    "operator": "above",
                    "priority": "critical",
                    "threshold": "90",
                    "time_function": "all"
                }]
            }
        })
    );
}

#[tokio::test]
async fn test_update_caller_values_win() {
    let mock_server = MockServer::start().await;
    mount_condition_list(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/v2/alerts_conditions/101.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"condition": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .alert_conditions()
        .update(
            101,
            1,
            AlertConditionUpdate {
                enabled: Some(true),
                entities: Some(vec![1, 2]),
                terms: Some(vec![critical_term()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let puts = requests_with_method(&mock_server, "PUT").await;
    let body = body_json(&puts[0]);
    let condition = &body["condition"];
    assert_eq!(condition["enabled"], true);
    assert_eq!(condition["entities"], json!([1, 2]));
    assert_eq!(condition["terms"][0]["threshold"], "80");
    // Fetched values survive
    assert_eq!(condition["name"], "Custom metric alert");
    assert_eq!(condition["condition_scope"], "application");
    assert_eq!(
        condition["user_defined"],
        json!({"metric": "Custom/Queue/Depth", "value_function": "max"})
    );
}

#[tokio::test]
async fn test_update_missing_condition_is_not_found_without_write() {
    let mock_server = MockServer::start().await;
    mount_condition_list(&mock_server).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .alert_conditions()
        .update(999, 1, AlertConditionUpdate::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("999"));
}

#[tokio::test]
async fn test_update_user_defined_without_block_is_configuration_error() {
    let mock_server = MockServer::start().await;
    mount_condition_list(&mock_server).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .alert_conditions()
        .update(
            102,
            1,
            AlertConditionUpdate {
                name: Some("Still broken".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Configuration(_)));
}

#[tokio::test]
async fn test_update_switching_to_user_defined_uses_caller_block() {
    let mock_server = MockServer::start().await;
    mount_condition_list(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/v2/alerts_conditions/100.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"condition": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .alert_conditions()
        .update(
            100,
            1,
            AlertConditionUpdate {
                metric: Some(USER_DEFINED_METRIC.to_string()),
                user_defined: Some(UserDefined {
                    metric: "Custom/Load".to_string(),
                    value_function: "average".to_string(),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let body = body_json(&requests_with_method(&mock_server, "PUT").await[0]);
    assert_eq!(body["condition"]["metric"], "user_defined");
    assert_eq!(body["condition"]["user_defined"]["metric"], "Custom/Load");
}

#[tokio::test]
async fn test_update_list_failure_propagates_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/alerts_conditions.json"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string(r#"{"error":{"title":"Forbidden"}}"#),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .alert_conditions()
        .update(100, 1, AlertConditionUpdate::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(requests_with_method(&mock_server, "PUT").await.is_empty());
}

#[tokio::test]
async fn test_create_posts_to_policy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/alerts_conditions/policies/1.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "condition": {"id": 300}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let condition = AlertConditionBody {
        condition_type: "apm_app_metric".to_string(),
        name: "Apdex".to_string(),
        enabled: true,
        entities: vec![12],
        metric: "apdex".to_string(),
        terms: vec![critical_term()],
        condition_scope: Some("application".to_string()),
        runbook_url: None,
        user_defined: None,
    };

    let client = test_client(&mock_server);
    let result = client.alert_conditions().create(1, &condition).await.unwrap();
    assert_eq!(result["condition"]["id"], 300);

    let body = body_json(&requests_with_method(&mock_server, "POST").await[0]);
    assert_eq!(body["condition"]["type"], "apm_app_metric");
    assert_eq!(body["condition"]["enabled"], true);
    assert!(body["condition"].get("runbook_url").is_none());
}

#[tokio::test]
async fn test_create_user_defined_without_block_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let condition = AlertConditionBody {
        condition_type: "apm_app_metric".to_string(),
        name: "Custom".to_string(),
        enabled: true,
        entities: vec![12],
        metric: USER_DEFINED_METRIC.to_string(),
        terms: vec![critical_term()],
        condition_scope: None,
        runbook_url: None,
        user_defined: None,
    };

    let client = test_client(&mock_server);
    let err = client
        .alert_conditions()
        .create(1, &condition)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_list_sends_policy_and_page() {
    let mock_server = MockServer::start().await;
    mount_condition_list(&mock_server).await;

    let client = test_client(&mock_server);
    let result = client.alert_conditions().list(1, Some(2)).await.unwrap();
    assert_eq!(result["conditions"].as_array().map(Vec::len), Some(3));

    let gets = requests_with_method(&mock_server, "GET").await;
    assert_eq!(gets[0].url.query(), Some("policy_id=1&page=2"));
}

#[tokio::test]
async fn test_delete_with_empty_body_returns_empty_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/alerts_conditions/100.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.alert_conditions().delete(100).await.unwrap();
    assert!(result.is_empty());
}
