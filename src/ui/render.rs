//! Plain-text rendering of the dashboard view.

use std::fmt;

use super::state::UiState;

/// Label on the trigger control while idle or settled.
pub const TRIGGER_LABEL: &str = "Test API Connection";
/// Label on the trigger control while a check is in flight.
pub const LOADING_LABEL: &str = "Testing...";

/// Trigger control as currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    /// Button text.
    pub label: &'static str,
    /// Whether the button accepts clicks.
    pub disabled: bool,
}

impl Control {
    /// Control for the given state.
    pub fn for_state(state: &UiState) -> Self {
        if state.is_loading() {
            Self {
                label: LOADING_LABEL,
                disabled: true,
            }
        } else {
            Self {
                label: TRIGGER_LABEL,
                disabled: false,
            }
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ]", self.label)?;
        if self.disabled {
            write!(f, " (disabled)")?;
        }
        Ok(())
    }
}

/// A state paired with the backend URL it is displayed against.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    state: &'a UiState,
    backend_url: &'a str,
}

impl<'a> View<'a> {
    /// Create a view. `backend_url` should be read fresh for every render.
    pub fn new(state: &'a UiState, backend_url: &'a str) -> Self {
        Self { state, backend_url }
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Control::for_state(self.state))?;

        match self.state {
            UiState::Idle | UiState::Loading => {}
            UiState::Success(result) => {
                writeln!(f, "API Connection Successful!")?;
                writeln!(f, "Message: {}", result.api_info.message)?;
                writeln!(f, "Version: {}", result.api_info.version)?;
                writeln!(f, "Backend URL: {}", self.backend_url)?;
                if let Some(health) = &result.health_check {
                    writeln!(f, "Health Status: {}", health.status)?;
                    writeln!(f, "Uptime: {}s", health.uptime_secs())?;
                }
            }
            UiState::Error(message) => {
                writeln!(f, "Connection Failed")?;
                writeln!(f, "Error: {message}")?;
                writeln!(
                    f,
                    "Make sure the backend server is running on {}",
                    self.backend_url
                )?;
            }
        }

        Ok(())
    }
}

/// Render a state as text.
pub fn render(state: &UiState, backend_url: &str) -> String {
    View::new(state, backend_url).to_string()
}
