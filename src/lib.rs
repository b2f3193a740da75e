//! Lifestyle dashboard: API service and connectivity-check client.
//!
//! The crate holds both halves of the dashboard's API contract:
//!
//! ```text
//! ConnectivityPanel ──trigger──▶ ApiClient ──GET /────────────▶ api::create_router
//!       ▲                          │        ──GET /api/health──▶
//!       └──── success | error ◀────┘  (both concurrently, first failure wins)
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`types`]: Payloads exchanged with the API
//! - [`client`]: HTTP client and the connectivity-check seam
//! - [`ui`]: Connectivity-check state machine and rendering
//! - [`api`]: HTTP API for service info and health
//! - [`metrics`]: Request and check metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod types;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use error::{ClientError, DashboardError, Result};
