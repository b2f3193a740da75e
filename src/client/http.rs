//! HTTP client for the dashboard API.

use std::future::Future;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::error::ClientError;
use crate::metrics;
use crate::types::{ConnectivityResult, HealthStatus, ServiceInfo, Validate};

use super::ConnectivityCheck;

/// Path of the health endpoint relative to the base URL.
pub const HEALTH_PATH: &str = "/api/health";

/// Dashboard API client.
///
/// No request timeout and no retries; failures surface as soon as they happen.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL exactly as configured.
    base_url: String,
}

impl ApiClient {
    /// Create a client targeting `config.api_url`.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        Self::with_base_url(&config.api_url)
    }

    /// Create a client targeting an explicit base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        Url::parse(base_url)?;

        let http = reqwest::Client::builder()
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(ClientError::Builder)?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the health endpoint; a trailing slash on the base is not doubled.
    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), HEALTH_PATH)
    }

    /// Fetch the service banner from the base URL.
    #[instrument(skip(self), fields(url = %self.base_url))]
    pub async fn get_service_info(&self) -> Result<ServiceInfo, ClientError> {
        self.get_json(&self.base_url, "info").await
    }

    /// Fetch the health payload from `<base>/api/health`.
    #[instrument(skip(self), fields(url = %self.base_url))]
    pub async fn get_health_status(&self) -> Result<HealthStatus, ClientError> {
        self.get_json(&self.health_url(), "health").await
    }

    /// Fetch info and health concurrently.
    ///
    /// Returns the combined result only if both succeed. The first failure
    /// wins and the other request is dropped; no partial result is produced.
    #[instrument(skip(self), fields(url = %self.base_url))]
    pub async fn check_connectivity(&self) -> Result<ConnectivityResult, ClientError> {
        let (api_info, health_check) =
            tokio::try_join!(self.get_service_info(), self.get_health_status())?;

        debug!(version = %api_info.version, status = %health_check.status, "Connectivity check passed");

        Ok(ConnectivityResult {
            api_info,
            health_check: Some(health_check),
        })
    }

    async fn get_json<T>(&self, url: &str, endpoint: &'static str) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Validate,
    {
        let start = Instant::now();
        let result = self.fetch(url).await;
        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        metrics::record_api_request(start, endpoint, outcome);
        result
    }

    async fn fetch<T>(&self, url: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Validate,
    {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "API returned error status");
            return Err(ClientError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let value: T =
            serde_json::from_slice(&body).map_err(|e| ClientError::Schema(e.to_string()))?;
        value.validate().map_err(ClientError::Schema)?;

        Ok(value)
    }
}

impl ConnectivityCheck for ApiClient {
    type Error = ClientError;

    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    fn check_connectivity(
        &self,
    ) -> impl Future<Output = Result<ConnectivityResult, Self::Error>> + Send {
        ApiClient::check_connectivity(self)
    }
}
