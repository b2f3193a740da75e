//! Unified error types for the dashboard.

use thiserror::Error;

/// Unified error type for the dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// API client error.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// Metrics exporter could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the API client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A response arrived but its status was not 2xx.
    #[error("HTTP error! status: {status}")]
    Transport {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The request never completed (DNS, connection refused, reset).
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Schema(String),

    /// The HTTP client could not be constructed; no request was made.
    #[error("failed to build HTTP client: {0}")]
    Builder(#[source] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Status code for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Transport { status } => Some(*status),
            _ => None,
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Transport { .. } => "transport",
            ClientError::Network(_) => "network",
            ClientError::Schema(_) => "schema",
            ClientError::Builder(_) => "builder",
            ClientError::InvalidUrl(_) => "invalid_url",
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, DashboardError>;
