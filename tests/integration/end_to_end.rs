//! Real API server, real client, dashboard panel on top.

use std::sync::Arc;

use lifestyle_dashboard::api::{create_router, AppState};
use lifestyle_dashboard::client::ApiClient;
use lifestyle_dashboard::ui::{ConnectivityPanel, Phase, UiState};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::new());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn panel_reports_success_against_live_server() {
    let base_url = spawn_server().await;
    let client = ApiClient::with_base_url(&base_url).unwrap();
    let panel = ConnectivityPanel::new(Arc::new(client));

    let state = panel.run_check().await;
    assert_eq!(state.phase(), Phase::Success);

    let result = state.result().unwrap();
    assert_eq!(result.api_info.message, "Lifestyle Dashboard API");
    assert_eq!(result.api_info.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(result.health_check.as_ref().unwrap().status, "healthy");

    let text = panel.render();
    assert!(text.contains("API Connection Successful!"));
    assert!(text.contains(&format!("Backend URL: {base_url}")));
    assert!(text.contains("Uptime: "));
}

#[tokio::test]
async fn panel_reports_error_when_server_is_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = ApiClient::with_base_url(&base_url).unwrap();
    let panel = ConnectivityPanel::new(Arc::new(client));

    let state = panel.run_check().await;
    assert_eq!(state.phase(), Phase::Error);
    assert!(panel
        .render()
        .contains(&format!("Make sure the backend server is running on {base_url}")));

    // Still interactive after a failure.
    let handle = panel.trigger();
    assert_eq!(panel.state(), UiState::Loading);
    handle.await.unwrap();
    assert_eq!(panel.state().phase(), Phase::Error);
}

#[tokio::test]
async fn unknown_route_on_live_server_is_404() {
    let base_url = spawn_server().await;

    let response = reqwest::get(format!("{base_url}/nope")).await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "Route not found"}));
}
