//! Dashboard UI states and transitions.

use strum::{Display, EnumString, IntoStaticStr};

use crate::types::ConnectivityResult;

/// Message shown when a check ends without an error value to display.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Discriminant of [`UiState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Nothing triggered yet.
    Idle,
    /// A check is in flight.
    Loading,
    /// Last check succeeded.
    Success,
    /// Last check failed.
    Error,
}

/// Exactly one of these is displayed at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    /// Initial state.
    #[default]
    Idle,
    /// A check is in flight; prior results are cleared.
    Loading,
    /// Both endpoints answered.
    Success(ConnectivityResult),
    /// The check failed with this message.
    Error(String),
}

/// How a triggered check ended.
#[derive(Debug)]
pub enum Settled<E> {
    /// Check resolved with a result.
    Resolved(ConnectivityResult),
    /// Check failed with an error value.
    Failed(E),
    /// Check task ended without a value (panicked or was cancelled).
    Aborted,
}

impl UiState {
    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self {
            UiState::Idle => Phase::Idle,
            UiState::Loading => Phase::Loading,
            UiState::Success(_) => Phase::Success,
            UiState::Error(_) => Phase::Error,
        }
    }

    /// True while a check is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Result of the last successful check.
    pub fn result(&self) -> Option<&ConnectivityResult> {
        match self {
            UiState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Message of the last failed check.
    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Terminal state for a settled check.
    pub fn settled<E: std::error::Error>(outcome: Settled<E>) -> Self {
        match outcome {
            Settled::Resolved(result) => UiState::Success(result),
            Settled::Failed(err) => UiState::Error(err.to_string()),
            Settled::Aborted => UiState::Error(UNKNOWN_ERROR.to_string()),
        }
    }
}
