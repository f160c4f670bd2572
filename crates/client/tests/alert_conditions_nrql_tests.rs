//! NRQL alert condition endpoint tests.
//!
//! # Invariants
//! - `static` bodies carry `value_function` and never the outlier fields
//! - `outlier` bodies carry `expected_groups`/`ignore_overlap` and never `value_function`
//! - A body missing its companion fields is rejected before any write

mod common;

use common::*;
use newrelic_client::models::{
    AlertTerm, Nrql, NrqlConditionBody, NrqlConditionUpdate, OUTLIER_THRESHOLD, STATIC_THRESHOLD,
};
use wiremock::matchers::{method, path, query_param};

async fn mount_nrql_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2/alerts_nrql_conditions.json"))
        .and(query_param("policy_id", "5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("nrql_conditions/list_nrql_conditions.json")),
        )
        .mount(server)
        .await;
}

async fn mount_put(server: &MockServer, id: u64, expected: u64) {
    Mock::given(method("PUT"))
        .and(path(format!("/v2/alerts_nrql_conditions/{}.json", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nrql_condition": {}})))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_update_static_keeps_value_function() {
    let mock_server = MockServer::start().await;
    mount_nrql_list(&mock_server).await;
    mount_put(&mock_server, 200, 1).await;

    let client = test_client(&mock_server);
    client
        .alert_conditions_nrql()
        .update(
            200,
            5,
            NrqlConditionUpdate {
                query: Some("SELECT count(*) FROM TransactionError WHERE appName = 'web'".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let body = body_json(&requests_with_method(&mock_server, "PUT").await[0]);
    let condition = &body["nrql_condition"];
    assert_eq!(condition["type"], "static");
    assert_eq!(condition["value_function"], "single_value");
    assert_eq!(
        condition["nrql"],
        json!({
            "query": "SELECT count(*) FROM TransactionError WHERE appName = 'web'",
            "since_value": "3"
        })
    );
    assert!(condition.get("expected_groups").is_none());
    assert!(condition.get("ignore_overlap").is_none());
}

#[tokio::test]
async fn test_update_outlier_to_static_requires_value_function() {
    let mock_server = MockServer::start().await;
    mount_nrql_list(&mock_server).await;
    mount_put(&mock_server, 201, 0).await;

    let client = test_client(&mock_server);
    let err = client
        .alert_conditions_nrql()
        .update(
            201,
            5,
            NrqlConditionUpdate {
                threshold_type: Some(STATIC_THRESHOLD.to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_update_outlier_drops_value_function() {
    let mock_server = MockServer::start().await;
    mount_nrql_list(&mock_server).await;
    mount_put(&mock_server, 201, 1).await;

    let client = test_client(&mock_server);
    client
        .alert_conditions_nrql()
        .update(
            201,
            5,
            NrqlConditionUpdate {
                value_function: Some("sum".to_string()),
                expected_groups: Some(4),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let body = body_json(&requests_with_method(&mock_server, "PUT").await[0]);
    let condition = &body["nrql_condition"];
    assert_eq!(condition["type"], "outlier");
    assert_eq!(condition["expected_groups"], 4);
    assert_eq!(condition["ignore_overlap"], true);
    assert_eq!(condition["nrql"]["since_value"], "5");
    assert!(condition.get("value_function").is_none());
}

#[tokio::test]
async fn test_update_unknown_condition_is_not_found() {
    let mock_server = MockServer::start().await;
    mount_nrql_list(&mock_server).await;
    mount_put(&mock_server, 404, 0).await;

    let client = test_client(&mock_server);
    let err = client
        .alert_conditions_nrql()
        .update(404, 5, NrqlConditionUpdate::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_create_outlier_without_ignore_overlap_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let condition = NrqlConditionBody {
        threshold_type: OUTLIER_THRESHOLD.to_string(),
        name: "Outliers".to_string(),
        enabled: true,
        terms: vec![],
        nrql: Nrql {
            query: "SELECT count(*) FROM Transaction FACET host".to_string(),
            since_value: "3".to_string(),
        },
        runbook_url: None,
        expected_groups: Some(2),
        ignore_overlap: None,
        value_function: None,
    };

    let client = test_client(&mock_server);
    let err = client
        .alert_conditions_nrql()
        .create(5, condition)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Configuration(_)));
}

#[tokio::test]
async fn test_create_static_strips_outlier_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/alerts_nrql_conditions/policies/5.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"nrql_condition": {"id": 9}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let condition = NrqlConditionBody {
        threshold_type: STATIC_THRESHOLD.to_string(),
        name: "Errors".to_string(),
        enabled: false,
        terms: vec![AlertTerm {
            duration: "5".to_string(),
            operator: "above".to_string(),
            priority: "critical".to_string(),
            threshold: "1".to_string(),
            time_function: "any".to_string(),
        }],
        nrql: Nrql {
            query: "SELECT count(*) FROM TransactionError".to_string(),
            since_value: "1".to_string(),
        },
        runbook_url: None,
        expected_groups: Some(3),
        ignore_overlap: Some(false),
        value_function: Some("single_value".to_string()),
    };

    let client = test_client(&mock_server);
    client
        .alert_conditions_nrql()
        .create(5, condition)
        .await
        .unwrap();

    let body = body_json(&requests_with_method(&mock_server, "POST").await[0]);
    assert_eq!(body["nrql_condition"]["enabled"], false);
    assert!(body["nrql_condition"].get("expected_groups").is_none());
    assert!(body["nrql_condition"].get("ignore_overlap").is_none());
}
