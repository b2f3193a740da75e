//! HTTP API served to the dashboard: service info and health endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::{create_app, create_router, with_middleware};
