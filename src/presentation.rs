//! Presentation context for the Discover screen.
//!
//! Aggregated states are produced on the aggregator task and marshalled
//! over an unbounded channel to a single presenter task. The presenter is
//! the only writer of the latest-state holder and the only caller of the
//! [`StateObserver`], so observers see states strictly in production order.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::error::DiscoverError;
use crate::lifecycle::LifecycleScope;
use crate::traits::StateObserver;
use crate::view_state::DiscoverViewState;

/// Event delivered to the presenter task.
#[derive(Debug, Clone)]
pub enum PresentationEvent {
    /// A new aggregate state
    State(DiscoverViewState),
    /// The aggregate stream failed; no further states follow
    Failed(DiscoverError),
}

/// Sending half of the presentation context.
#[derive(Debug, Clone)]
pub struct Presenter {
    tx: mpsc::UnboundedSender<PresentationEvent>,
}

impl Presenter {
    /// Queue a state for publication. Returns `false` once the presenter is gone.
    pub fn publish(&self, state: DiscoverViewState) -> bool {
        self.tx.send(PresentationEvent::State(state)).is_ok()
    }

    /// Route a terminal aggregation error to the observer's error sink.
    pub fn fail(&self, error: DiscoverError) -> bool {
        self.tx.send(PresentationEvent::Failed(error)).is_ok()
    }
}

/// Spawn the presenter task in `scope`.
///
/// The task owns `state_tx`; once the scope is cancelled the sender is
/// dropped and receivers observe the holder as closed. No state is written
/// and no observer is called after [`LifecycleScope::cancel`] returns.
pub fn spawn_presenter(
    scope: &LifecycleScope,
    state_tx: watch::Sender<Option<DiscoverViewState>>,
    observer: Arc<dyn StateObserver>,
) -> Presenter {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let gate = scope.downgrade();

    scope.spawn(async move {
        while let Some(event) = rx.recv().await {
            // Queued events are dropped once the scope is cancelled
            let delivered = gate.run_active(|| match event {
                PresentationEvent::State(state) => {
                    state_tx.send_replace(Some(state.clone()));
                    observer.on_state_changed(&state);
                }
                PresentationEvent::Failed(error) => {
                    observer.on_error(&error);
                }
            });
            if delivered.is_none() {
                break;
            }
        }
        tracing::debug!("Presenter stopped");
    });

    Presenter { tx }
}
