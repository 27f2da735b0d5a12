//! Observer recording everything the presenter delivers.

use std::sync::Mutex;

use tokio::sync::watch;

use super::{lock, wait_until};
use crate::error::DiscoverError;
use crate::traits::StateObserver;
use crate::view_state::DiscoverViewState;

pub struct RecordingObserver {
    states: Mutex<Vec<DiscoverViewState>>,
    errors: Mutex<Vec<DiscoverError>>,
    /// Bumped on every delivery so waiters can re-check
    version_tx: watch::Sender<usize>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        let (version_tx, _) = watch::channel(0);
        Self {
            states: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
            version_tx,
        }
    }

    pub fn states(&self) -> Vec<DiscoverViewState> {
        lock(&self.states).clone()
    }

    pub fn errors(&self) -> Vec<DiscoverError> {
        lock(&self.errors).clone()
    }

    pub fn latest(&self) -> Option<DiscoverViewState> {
        lock(&self.states).last().cloned()
    }

    /// Wait until at least `count` states were delivered.
    pub async fn wait_for_states(&self, count: usize) -> bool {
        wait_until(self.version_tx.subscribe(), || lock(&self.states).len() >= count).await
    }

    /// Wait until at least `count` errors were delivered.
    pub async fn wait_for_errors(&self, count: usize) -> bool {
        wait_until(self.version_tx.subscribe(), || lock(&self.errors).len() >= count).await
    }

    fn bump(&self) {
        self.version_tx.send_modify(|version| *version += 1);
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl StateObserver for RecordingObserver {
    fn on_state_changed(&self, state: &DiscoverViewState) {
        lock(&self.states).push(state.clone());
        self.bump();
    }

    fn on_error(&self, error: &DiscoverError) {
        lock(&self.errors).push(error.clone());
        self.bump();
    }
}
