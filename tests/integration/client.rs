//! `ApiClient` against wiremock servers.

use lifestyle_dashboard::client::ApiClient;
use lifestyle_dashboard::types::{HealthStatus, ServiceInfo};
use lifestyle_dashboard::ClientError;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn info_body() -> serde_json::Value {
    json!({
        "message": "Lifestyle Dashboard API",
        "version": "1.0.0",
        "timestamp": "2025-08-12T20:00:00.000Z"
    })
}

fn health_body() -> serde_json::Value {
    json!({
        "status": "healthy",
        "timestamp": "2025-08-12T20:00:00.000Z",
        "uptime": 3600
    })
}

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn service_info_round_trips() {
    let server = MockServer::start().await;
    mount(&server, "/", ResponseTemplate::new(200).set_body_json(info_body())).await;

    let client = ApiClient::with_base_url(&server.uri()).unwrap();
    let info = assert_ok!(client.get_service_info().await);

    assert_eq!(
        info,
        ServiceInfo {
            message: "Lifestyle Dashboard API".to_string(),
            version: "1.0.0".to_string(),
            timestamp: "2025-08-12T20:00:00.000Z".to_string(),
        }
    );
}

#[tokio::test]
async fn health_status_round_trips() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/health",
        ResponseTemplate::new(200).set_body_json(health_body()),
    )
    .await;

    let client = ApiClient::with_base_url(&server.uri()).unwrap();
    let health = assert_ok!(client.get_health_status().await);

    assert_eq!(
        health,
        HealthStatus {
            status: "healthy".to_string(),
            timestamp: "2025-08-12T20:00:00.000Z".to_string(),
            uptime: 3600.0,
        }
    );
}

#[tokio::test]
async fn error_status_is_reported_with_code() {
    for status in [500u16, 503] {
        let server = MockServer::start().await;
        mount(&server, "/api/health", ResponseTemplate::new(status)).await;
        mount(&server, "/", ResponseTemplate::new(status)).await;

        let client = ApiClient::with_base_url(&server.uri()).unwrap();

        let err = assert_err!(client.get_health_status().await);
        assert_eq!(err.to_string(), format!("HTTP error! status: {status}"));
        assert_eq!(err.status(), Some(status));

        let err = assert_err!(client.get_service_info().await);
        assert_eq!(err.to_string(), format!("HTTP error! status: {status}"));
    }
}

#[tokio::test]
async fn connectivity_combines_both_results() {
    let server = MockServer::start().await;
    mount(&server, "/", ResponseTemplate::new(200).set_body_json(info_body())).await;
    mount(
        &server,
        "/api/health",
        ResponseTemplate::new(200).set_body_json(health_body()),
    )
    .await;

    let client = ApiClient::with_base_url(&server.uri()).unwrap();
    let result = assert_ok!(client.check_connectivity().await);

    assert_eq!(result.api_info.version, "1.0.0");
    assert_eq!(result.health_check.map(|h| h.uptime_secs()), Some(3600));
}

#[tokio::test]
async fn connectivity_fails_when_info_fails() {
    let server = MockServer::start().await;
    mount(&server, "/", ResponseTemplate::new(500)).await;
    mount(
        &server,
        "/api/health",
        ResponseTemplate::new(200).set_body_json(health_body()),
    )
    .await;

    let client = ApiClient::with_base_url(&server.uri()).unwrap();
    let err = assert_err!(client.check_connectivity().await);
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn first_failure_wins_over_slow_success() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/",
        ResponseTemplate::new(200)
            .set_body_json(info_body())
            .set_delay(Duration::from_secs(2)),
    )
    .await;
    mount(&server, "/api/health", ResponseTemplate::new(503)).await;

    let client = ApiClient::with_base_url(&server.uri()).unwrap();
    let started = std::time::Instant::now();
    let err = assert_err!(client.check_connectivity().await);

    assert_eq!(err.to_string(), "HTTP error! status: 503");
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn malformed_body_is_a_schema_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/health",
        ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})),
    )
    .await;
    mount(
        &server,
        "/",
        ResponseTemplate::new(200).set_body_json(json!({
            "message": "m",
            "version": "1",
            "timestamp": "not a time"
        })),
    )
    .await;

    let client = ApiClient::with_base_url(&server.uri()).unwrap();

    let err = assert_err!(client.get_health_status().await);
    assert!(matches!(err, ClientError::Schema(_)), "got: {err:?}");

    let err = assert_err!(client.get_service_info().await);
    assert!(matches!(err, ClientError::Schema(_)), "got: {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::with_base_url(&format!("http://{addr}")).unwrap();
    let err = assert_err!(client.check_connectivity().await);

    let ClientError::Network(source) = &err else {
        panic!("expected a network error, got: {err:?}");
    };
    assert_eq!(err.to_string(), source.to_string());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn service_info_targets_base_url_verbatim() {
    let server = MockServer::start().await;
    mount(&server, "/v1/", ResponseTemplate::new(200).set_body_json(info_body())).await;
    mount(
        &server,
        "/v1/api/health",
        ResponseTemplate::new(200).set_body_json(health_body()),
    )
    .await;

    let client = ApiClient::with_base_url(&format!("{}/v1/", server.uri())).unwrap();
    let info = assert_ok!(client.get_service_info().await);
    assert_eq!(info.version, "1.0.0");

    let result = assert_ok!(client.check_connectivity().await);
    assert_eq!(result.api_info, info);

    let requested: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect();
    assert!(requested.iter().all(|path| path != "/v1"), "got: {requested:?}");
}
