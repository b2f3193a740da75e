//! Connectivity-check dashboard view.
//!
//! A small state machine (`idle -> loading -> success | error`) driven by a
//! [`ConnectivityCheck`](crate::client::ConnectivityCheck), plus a plain-text
//! renderer for each state.

pub mod panel;
pub mod render;
pub mod state;

pub use panel::ConnectivityPanel;
pub use render::{render, Control, View};
pub use state::{Phase, Settled, UiState, UNKNOWN_ERROR};
