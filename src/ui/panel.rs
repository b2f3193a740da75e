//! The connectivity-check panel: trigger, track, and render a check.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::client::ConnectivityCheck;
use crate::metrics;

use super::render::{Control, View};
use super::state::{Settled, UiState};

/// Drives [`UiState`] from a [`ConnectivityCheck`].
///
/// Each trigger is tagged with a sequence number. A check that settles after
/// a newer trigger is discarded, so the view always reflects the most recently
/// triggered check.
pub struct ConnectivityPanel<C> {
    client: Arc<C>,
    state: Arc<watch::Sender<UiState>>,
    latest: Arc<AtomicU64>,
}

impl<C> Clone for ConnectivityPanel<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            state: Arc::clone(&self.state),
            latest: Arc::clone(&self.latest),
        }
    }
}

impl<C: ConnectivityCheck> ConnectivityPanel<C> {
    /// Create an idle panel.
    pub fn new(client: Arc<C>) -> Self {
        let (state, _) = watch::channel(UiState::Idle);
        Self {
            client,
            state: Arc::new(state),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The client the panel drives.
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Watch state changes.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Trigger control for the current state.
    pub fn control(&self) -> Control {
        Control::for_state(&self.state.borrow())
    }

    /// Render the current state; the backend URL is read from the client now.
    pub fn render(&self) -> String {
        let backend_url = self.client.base_url();
        let state = self.state();
        View::new(&state, &backend_url).to_string()
    }

    /// Start a check.
    ///
    /// The panel is `loading` when this returns. Must be called from within a
    /// Tokio runtime. A trigger while loading is not rejected; it restarts.
    pub fn trigger(&self) -> JoinHandle<()> {
        let seq = self.begin();
        let panel = self.clone();

        tokio::spawn(async move {
            let client = Arc::clone(&panel.client);
            let check = tokio::spawn(async move { client.check_connectivity().await });

            let settled = match check.await {
                Ok(Ok(result)) => Settled::Resolved(result),
                Ok(Err(err)) => Settled::Failed(err),
                Err(join_err) => {
                    warn!(seq, error = %join_err, "Connectivity check aborted");
                    Settled::Aborted
                }
            };

            panel.settle(seq, settled);
        })
    }

    /// Trigger a check and wait for it to settle.
    pub async fn run_check(&self) -> UiState {
        if let Err(e) = self.trigger().await {
            warn!(error = %e, "Connectivity panel task failed");
        }
        self.state()
    }

    fn begin(&self) -> u64 {
        let mut seq = 0;
        self.state.send_modify(|state| {
            seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = UiState::Loading;
        });
        debug!(seq, "Connectivity check started");
        seq
    }

    /// Apply a settled check if it is still the latest. Returns whether it was applied.
    fn settle<E: std::error::Error>(&self, seq: u64, settled: Settled<E>) -> bool {
        let next = UiState::settled(settled);
        let phase = next.phase();

        let applied = self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != seq {
                return false;
            }
            *state = next;
            true
        });

        if applied {
            metrics::inc_connectivity_checks(phase.into());
            match self.state.borrow().error() {
                Some(message) => warn!(seq, %phase, error = %message, "Connectivity check settled"),
                None => info!(seq, %phase, "Connectivity check settled"),
            }
        } else {
            metrics::inc_stale_checks();
            debug!(seq, "Discarding stale connectivity check");
        }

        applied
    }
}
