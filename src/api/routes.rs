//! HTTP API route definitions.

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers::{health, info, internal_error, not_found, AppState};
use crate::config::Config;
use crate::error::DashboardError;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(info))
        .route("/api/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

/// Wrap a router with panic recovery, security headers, CORS, and tracing.
pub fn with_middleware(router: Router, frontend_url: &str) -> Result<Router, DashboardError> {
    let origin = HeaderValue::from_str(frontend_url).map_err(|e| {
        DashboardError::InvalidConfig(format!("FRONTEND_URL is not a valid origin: {e}"))
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_credentials(true);

    Ok(router
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Create the full application from configuration.
pub fn create_app(config: &Config) -> Result<Router, DashboardError> {
    let state = AppState::from_config(config);
    with_middleware(create_router(state), config.frontend_url.trim_end_matches('/'))
}
