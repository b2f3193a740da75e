//! Client side of the dashboard API contract.
//!
//! This module handles:
//! - The reqwest-backed [`ApiClient`]
//! - The [`ConnectivityCheck`] seam the dashboard UI depends on
//! - A scripted mock client for testing

pub mod http;
pub mod mock;

use std::future::Future;

use crate::types::ConnectivityResult;

pub use http::ApiClient;
pub use mock::{sample_result, MockApiClient, MockError, MockOutcome};

/// Anything that can run the combined info + health check.
pub trait ConnectivityCheck: Send + Sync + 'static {
    /// Error surfaced when the check fails.
    type Error: std::error::Error + Send + 'static;

    /// Base URL the check targets, evaluated at call time.
    fn base_url(&self) -> String;

    /// Fetch info and health concurrently; fail with the first error.
    fn check_connectivity(
        &self,
    ) -> impl Future<Output = Result<ConnectivityResult, Self::Error>> + Send;
}
