//! Application configuration loaded from environment variables.

use serde::Deserialize;
use url::Url;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "API_URL";

/// Base URL used when [`API_URL_ENV`] is unset or empty.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Return the API base URL from the environment, falling back to the local default.
///
/// Read on every call, never cached. Prefer passing [`Config::api_url`] to the
/// components that issue requests; this exists for defaults and diagnostics.
pub fn get_base_url() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Client ===
    /// Base URL of the API the dashboard checks.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    // === Server ===
    /// Port the API server binds.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin allowed by CORS (the dashboard frontend).
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,

    /// `message` field returned by the info endpoint.
    #[serde(default = "default_api_message")]
    pub api_message: String,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    // === Metrics ===
    /// Expose a Prometheus scrape endpoint.
    #[serde(default)]
    pub metrics_enabled: bool,

    /// Port for the Prometheus exporter.
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_frontend_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_api_message() -> String {
    "Lifestyle Dashboard API".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_metrics_port() -> u16 {
    9091
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            port: default_port(),
            frontend_url: default_frontend_url(),
            api_message: default_api_message(),
            rust_log: default_log_level(),
            verbose: false,
            metrics_enabled: false,
            metrics_port: default_metrics_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Build configuration from explicit key/value pairs (upper-case keys).
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        check_http_url("API_URL", &self.api_url)?;
        check_http_url("FRONTEND_URL", &self.frontend_url)?;

        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.metrics_enabled && self.metrics_port == self.port {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed.
    pub fn api_url_trimmed(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

fn check_http_url(name: &str, value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("{name} is not a valid URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("{name} must use http or https, got {other}")),
    }
}
