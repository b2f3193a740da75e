//! HTTP API handlers.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::config::Config;
use crate::types::{HealthStatus, ServiceInfo};
use crate::utils::timestamp_now;

/// Health label reported by a running server.
pub const HEALTHY: &str = "healthy";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// When the server state was created; uptime is measured from here.
    pub started_at: Instant,
    /// Banner returned by the info endpoint.
    pub message: Arc<str>,
    /// Version returned by the info endpoint.
    pub version: &'static str,
}

impl AppState {
    /// Create new app state with the default banner.
    pub fn new() -> Self {
        Self::with_message(Config::default().api_message)
    }

    /// Create new app state from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_message(config.api_message.clone())
    }

    fn with_message(message: String) -> Self {
        Self {
            started_at: Instant::now(),
            message: message.into(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Seconds since the state was created.
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Error body for 404 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error.
    pub error: &'static str,
}

/// Service info handler.
pub async fn info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: state.message.to_string(),
        version: state.version.to_string(),
        timestamp: timestamp_now(),
    })
}

/// Health check handler - always returns 200 while the process serves.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HEALTHY.to_string(),
        timestamp: timestamp_now(),
        uptime: state.uptime(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Route not found",
        }),
    )
}

/// Turn a handler panic into a 500 JSON response.
pub fn internal_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!(%detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Something went wrong!",
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Validate;

    #[test]
    fn uptime_is_non_negative() {
        let state = AppState::new();
        assert!(state.uptime() >= 0.0);
    }

    #[tokio::test]
    async fn health_payload_validates() {
        let Json(body) = health(State(AppState::new())).await;
        assert_eq!(body.status, "healthy");
        assert!(body.validate().is_ok());
    }

    #[tokio::test]
    async fn info_uses_configured_message() {
        let config = Config {
            api_message: "Custom banner".to_string(),
            ..Config::default()
        };
        let Json(body) = info(State(AppState::from_config(&config))).await;
        assert_eq!(body.message, "Custom banner");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert!(body.validate().is_ok());
    }

    #[test]
    fn panic_maps_to_500() {
        let response = internal_error(Box::new("kaboom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
