//! Integration tests for the dashboard client, API server, and panel.
//!
//! Run with: cargo test --test integration

mod client;
mod end_to_end;
