//! Endpoint tests for the list/show resources without merge-updates.
//!
//! Covers deployments, browser applications, components, dashboards, key
//! transactions, mobile applications, notification channels, plugins,
//! users, application hosts/instances and alert violations.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use newrelic_client::models::{
    AlertViolationListParams, ApplicationHostListParams, ComponentListParams, DashboardListParams,
    DeploymentParams, MetricDataQuery, MetricNamesQuery, NamedListParams,
    NotificationChannelParams, PluginListParams, UserListParams,
};
use wiremock::matchers::{method, path};

async fn mount_ok(server: &MockServer, http_method: &str, route: &str, body: Value) {
    Mock::given(method(http_method))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn last_query(server: &MockServer, http_method: &str) -> Option<String> {
    requests_with_method(server, http_method)
        .await
        .last()
        .and_then(|r| r.url.query().map(str::to_string))
}

#[tokio::test]
async fn test_deployments() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/applications/12/deployments.json", json!({"deployments": []})).await;
    mount_ok(&mock_server, "POST", "/v2/applications/12/deployments.json", json!({"deployment": {"id": 5}})).await;
    mount_ok(&mock_server, "DELETE", "/v2/applications/12/deployments/5.json", json!({"deployment": {"id": 5}})).await;

    let client = test_client(&mock_server);
    let deployments = client.application_deployments();
    deployments.list(12, Some(2)).await.unwrap();
    assert_eq!(last_query(&mock_server, "GET").await.as_deref(), Some("page=2"));

    deployments
        .create(
            12,
            &DeploymentParams {
                revision: "v1.4.2".to_string(),
                user: Some("release-bot".to_string()),
                timestamp: Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let body = body_json(&requests_with_method(&mock_server, "POST").await[0]);
    assert_eq!(body["deployment"]["revision"], "v1.4.2");
    assert_eq!(body["deployment"]["user"], "release-bot");
    assert_eq!(body["deployment"]["timestamp"], "2024-06-01T08:30:00Z");
    assert!(body["deployment"].get("changelog").is_none());

    deployments.delete(12, 5).await.unwrap();
}

#[tokio::test]
async fn test_browser_applications() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/browser_applications.json", json!({"browser_applications": []})).await;
    mount_ok(&mock_server, "POST", "/v2/browser_applications.json", json!({"browser_application": {"id": 1}})).await;

    let client = test_client(&mock_server);
    client
        .browser_applications()
        .list(&NamedListParams {
            filter_ids: vec![1, 2],
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        last_query(&mock_server, "GET").await.as_deref(),
        Some("filter[ids]=1,2")
    );

    client.browser_applications().create("storefront").await.unwrap();
    let body = body_json(&requests_with_method(&mock_server, "POST").await[0]);
    assert_eq!(body, json!({"browser_application": {"name": "storefront"}}));
}

#[tokio::test]
async fn test_components() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/components.json", json!({"components": []})).await;
    mount_ok(&mock_server, "GET", "/v2/components/8.json", json!({"component": {"id": 8}})).await;
    mount_ok(&mock_server, "GET", "/v2/components/8/metrics.json", json!({"metrics": []})).await;

    let client = test_client(&mock_server);
    let components = client.components();
    components
        .list(&ComponentListParams {
            filter_name: Some("redis".to_string()),
            filter_plugin_id: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    let first = requests_with_method(&mock_server, "GET").await;
    assert_eq!(
        first[0].url.query(),
        Some("filter[name]=redis&filter[plugin_id]=3")
    );

    components.show(8).await.unwrap();
    components
        .metric_names(8, &MetricNamesQuery::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_dashboards() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/dashboards.json", json!({"dashboards": []})).await;
    mount_ok(&mock_server, "GET", "/v2/dashboards/30.json", json!({"dashboard": {"id": 30}})).await;
    mount_ok(&mock_server, "POST", "/v2/dashboards.json", json!({"dashboard": {"id": 30}})).await;
    mount_ok(&mock_server, "PUT", "/v2/dashboards/30.json", json!({"dashboard": {"id": 30}})).await;
    mount_ok(&mock_server, "DELETE", "/v2/dashboards/30.json", json!({"dashboard": {"id": 30}})).await;

    let document = json!({"dashboard": {"title": "Ops", "widgets": []}});
    let client = test_client(&mock_server);
    let dashboards = client.dashboards();

    dashboards
        .list(&DashboardListParams {
            filter_title: Some("Ops".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        requests_with_method(&mock_server, "GET").await[0].url.query(),
        Some("filter[title]=Ops")
    );

    dashboards.show(30).await.unwrap();
    dashboards.create(&document).await.unwrap();
    dashboards.update(30, &document).await.unwrap();
    dashboards.delete(30).await.unwrap();

    assert_eq!(
        body_json(&requests_with_method(&mock_server, "PUT").await[0]),
        document
    );
}

#[tokio::test]
async fn test_key_transactions() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/key_transactions.json", json!({"key_transactions": []})).await;
    mount_ok(&mock_server, "GET", "/v2/key_transactions/4.json", json!({"key_transaction": {"id": 4}})).await;

    let client = test_client(&mock_server);
    client
        .key_transactions()
        .list(&NamedListParams {
            filter_name: Some("checkout".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    client.key_transactions().show(4).await.unwrap();
}

#[tokio::test]
async fn test_mobile_applications() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/mobile_applications.json", json!({"applications": []})).await;
    mount_ok(&mock_server, "GET", "/v2/mobile_applications/6.json", json!({"application": {"id": 6}})).await;
    mount_ok(&mock_server, "GET", "/v2/mobile_applications/6/metrics.json", json!({"metrics": []})).await;
    mount_ok(&mock_server, "GET", "/v2/mobile_applications/6/metrics/data.json", json!({"metric_data": {}})).await;

    let client = test_client(&mock_server);
    let mobile = client.mobile_applications();
    mobile.list(None).await.unwrap();
    mobile.show(6).await.unwrap();
    mobile
        .metric_names(
            6,
            &MetricNamesQuery {
                cursor: Some("next-page".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        last_query(&mock_server, "GET").await.as_deref(),
        Some("cursor=next-page")
    );

    mobile
        .metric_data(6, &MetricDataQuery::new(["Mobile/Crash/All"]).period(600))
        .await
        .unwrap();
    assert_eq!(
        last_query(&mock_server, "GET").await.as_deref(),
        Some("names[]=Mobile/Crash/All&period=600")
    );
}

#[tokio::test]
async fn test_notification_channels() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/alerts_channels.json", json!({"channels": []})).await;
    mount_ok(&mock_server, "POST", "/v2/alerts_channels.json", json!({"channels": [{"id": 9}]})).await;
    mount_ok(&mock_server, "DELETE", "/v2/alerts_channels/9.json", json!({"channel": {"id": 9}})).await;

    let client = test_client(&mock_server);
    let channels = client.notification_channels();
    channels.list(Some(1)).await.unwrap();
    channels
        .create(&NotificationChannelParams {
            name: "On-call email".to_string(),
            channel_type: "email".to_string(),
            configuration: json!({"recipients": "oncall@example.com", "include_json_attachment": true}),
        })
        .await
        .unwrap();
    channels.delete(9).await.unwrap();

    let body = body_json(&requests_with_method(&mock_server, "POST").await[0]);
    assert_eq!(body["channel"]["type"], "email");
    assert_eq!(body["channel"]["configuration"]["recipients"], "oncall@example.com");
}

#[tokio::test]
async fn test_plugins() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/plugins.json", json!({"plugins": []})).await;
    mount_ok(&mock_server, "GET", "/v2/plugins/2.json", json!({"plugin": {"id": 2}})).await;

    let client = test_client(&mock_server);
    client
        .plugins()
        .list(&PluginListParams {
            detailed: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        last_query(&mock_server, "GET").await.as_deref(),
        Some("detailed=true")
    );

    client.plugins().show(2, Some(false)).await.unwrap();
    assert_eq!(
        last_query(&mock_server, "GET").await.as_deref(),
        Some("detailed=false")
    );
}

#[tokio::test]
async fn test_users() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/users.json", json!({"users": []})).await;
    mount_ok(&mock_server, "GET", "/v2/users/21.json", json!({"user": {"id": 21}})).await;

    let client = test_client(&mock_server);
    client
        .users()
        .list(&UserListParams {
            filter_email: Some("admin@example.com".to_string()),
            page: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        last_query(&mock_server, "GET").await.as_deref(),
        Some("filter[email]=admin@example.com&page=1")
    );
    client.users().show(21).await.unwrap();
}

#[tokio::test]
async fn test_application_hosts_and_instances() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/applications/12/hosts.json", json!({"application_hosts": []})).await;
    mount_ok(&mock_server, "GET", "/v2/applications/12/hosts/3.json", json!({"application_host": {"id": 3}})).await;
    mount_ok(&mock_server, "GET", "/v2/applications/12/hosts/3/metrics/data.json", json!({"metric_data": {}})).await;
    mount_ok(&mock_server, "GET", "/v2/applications/12/instances.json", json!({"application_instances": []})).await;
    mount_ok(&mock_server, "GET", "/v2/applications/12/instances/4.json", json!({"application_instance": {"id": 4}})).await;
    mount_ok(&mock_server, "GET", "/v2/applications/12/instances/4/metrics.json", json!({"metrics": []})).await;

    let filters = ApplicationHostListParams {
        filter_hostname: Some("web-01".to_string()),
        ..Default::default()
    };
    let client = test_client(&mock_server);

    client.application_hosts().list(12, &filters).await.unwrap();
    assert_eq!(
        last_query(&mock_server, "GET").await.as_deref(),
        Some("filter[hostname]=web-01")
    );
    client.application_hosts().show(12, 3).await.unwrap();
    client
        .application_hosts()
        .metric_data(12, 3, &MetricDataQuery::new(["Apdex"]))
        .await
        .unwrap();

    client.application_instances().list(12, &filters).await.unwrap();
    client.application_instances().show(12, 4).await.unwrap();
    client
        .application_instances()
        .metric_names(12, 4, &MetricNamesQuery::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_alert_violations_window() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/v2/alerts_violations.json", json!({"violations": []})).await;

    let client = test_client(&mock_server);
    client
        .alert_violations()
        .list(&AlertViolationListParams {
            start_date: Some(Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2024, 7, 2, 0, 0, 0).unwrap()),
            only_open: Some(true),
            page: None,
        })
        .await
        .unwrap();

    assert_eq!(
        last_query(&mock_server, "GET").await.as_deref(),
        Some("start_date=2024-07-01T00:00:00Z&end_date=2024-07-02T00:00:00Z&only_open=true")
    );
}
