//! Payload types shared by the API server, client, and dashboard.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Human-readable service banner.
    pub message: String,
    /// Service version.
    pub version: String,
    /// RFC 3339 generation time.
    pub timestamp: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Health label, e.g. "healthy".
    pub status: String,
    /// RFC 3339 generation time.
    pub timestamp: String,
    /// Process uptime in seconds.
    pub uptime: f64,
}

/// Combined result of a connectivity check.
///
/// `ApiClient` always fills `health_check`; renderers tolerate its absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityResult {
    /// Info endpoint payload.
    pub api_info: ServiceInfo,
    /// Health endpoint payload.
    pub health_check: Option<HealthStatus>,
}

/// Shape checks applied after a body deserializes.
pub trait Validate {
    /// Return a description of the first problem found.
    fn validate(&self) -> Result<(), String>;
}

fn check_timestamp(timestamp: &str) -> Result<(), String> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|_| ())
        .map_err(|e| format!("timestamp {timestamp:?} is not RFC 3339: {e}"))
}

impl Validate for ServiceInfo {
    fn validate(&self) -> Result<(), String> {
        check_timestamp(&self.timestamp)
    }
}

impl Validate for HealthStatus {
    fn validate(&self) -> Result<(), String> {
        if !self.uptime.is_finite() || self.uptime < 0.0 {
            return Err(format!("uptime must be a non-negative number, got {}", self.uptime));
        }
        check_timestamp(&self.timestamp)
    }
}

impl HealthStatus {
    /// Uptime floored to whole seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.uptime.floor() as u64
    }
}
