//! Mock API client for unit testing and demos.
//!
//! This module provides a client that replays scripted outcomes
//! without making real network requests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use thiserror::Error;

use crate::types::{ConnectivityResult, HealthStatus, ServiceInfo};

use super::ConnectivityCheck;

/// Error returned by scripted failures; displays the scripted message verbatim.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct MockError(pub String);

/// One scripted check outcome.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Resolve with this result.
    Success(ConnectivityResult),
    /// Fail with a [`MockError`] carrying this message.
    Failure(String),
    /// Panic with this string as the payload (not an error value).
    Panic(String),
}

#[derive(Debug, Clone)]
struct MockStep {
    outcome: MockOutcome,
    latency: Duration,
}

/// Mock dashboard API client.
#[derive(Debug, Clone)]
pub struct MockApiClient {
    /// Base URL reported to renderers.
    base_url: Arc<Mutex<String>>,
    /// Outcomes replayed in order, one per check.
    steps: Arc<Mutex<VecDeque<MockStep>>>,
    /// Number of checks started.
    calls: Arc<AtomicUsize>,
}

impl MockApiClient {
    /// Create a mock client with an empty script.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Arc::new(Mutex::new(base_url.into())),
            steps: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queue an outcome that resolves immediately.
    pub fn push(&self, outcome: MockOutcome) -> &Self {
        self.push_delayed(outcome, Duration::ZERO)
    }

    /// Queue an outcome that resolves after `latency`.
    pub fn push_delayed(&self, outcome: MockOutcome, latency: Duration) -> &Self {
        self.steps
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(MockStep { outcome, latency });
        self
    }

    /// Change the reported base URL.
    pub fn set_base_url(&self, base_url: impl Into<String>) {
        *self.base_url.lock().unwrap_or_else(PoisonError::into_inner) = base_url.into();
    }

    /// Number of checks started so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_step(&self) -> Option<MockStep> {
        self.steps
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }
}

impl ConnectivityCheck for MockApiClient {
    type Error = MockError;

    fn base_url(&self) -> String {
        self.base_url
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn check_connectivity(
        &self,
    ) -> impl Future<Output = Result<ConnectivityResult, Self::Error>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.next_step();

        async move {
            let Some(step) = step else {
                return Err(MockError("no scripted outcome left".to_string()));
            };

            if !step.latency.is_zero() {
                tokio::time::sleep(step.latency).await;
            }

            match step.outcome {
                MockOutcome::Success(result) => Ok(result),
                MockOutcome::Failure(message) => Err(MockError(message)),
                MockOutcome::Panic(payload) => std::panic::panic_any(payload),
            }
        }
    }
}

/// A well-formed result, as a healthy API at version 1.0.0 would produce.
pub fn sample_result() -> ConnectivityResult {
    ConnectivityResult {
        api_info: ServiceInfo {
            message: "Lifestyle Dashboard API".to_string(),
            version: "1.0.0".to_string(),
            timestamp: "2025-08-12T20:00:00.000Z".to_string(),
        },
        health_check: Some(HealthStatus {
            status: "healthy".to_string(),
            timestamp: "2025-08-12T20:00:00.000Z".to_string(),
            uptime: 3600.0,
        }),
    }
}
