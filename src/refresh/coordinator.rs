//! Connectivity-gated refresh of the Discover data sources.
//!
//! Every refresh attempt runs as its own task in the controller's scope.
//! Failures are logged with the source they came from and reported as a
//! [`RefreshOutcome`]; they never cancel the sibling refresh, the
//! connectivity subscription or the state stream.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use super::outcome::{RefreshOutcome, RefreshTrigger};
use crate::config::DiscoverConfig;
use crate::error::DiscoverError;
use crate::lifecycle::LifecycleScope;
use crate::models::{Page, SourceKind};
use crate::traits::{ConnectivityWatcher, DataSource};

/// Launches refresh rounds against the trending and popular sources.
///
/// Cheap to clone; clones share the outcome channel.
#[derive(Clone)]
pub struct RefreshCoordinator {
    inner: Arc<CoordinatorInner>,
}

struct CoordinatorInner {
    trending: Arc<dyn DataSource>,
    popular: Arc<dyn DataSource>,
    page: Page,
    timeout: Option<Duration>,
    outcomes: broadcast::Sender<RefreshOutcome>,
}

impl RefreshCoordinator {
    pub fn new(
        trending: Arc<dyn DataSource>,
        popular: Arc<dyn DataSource>,
        config: &DiscoverConfig,
    ) -> Self {
        let (outcomes, _) = broadcast::channel(config.outcome_buffer.max(1));
        Self {
            inner: Arc::new(CoordinatorInner {
                trending,
                popular,
                page: config.page,
                timeout: config.refresh_timeout(),
                outcomes,
            }),
        }
    }

    /// Receive a report for every refresh attempt that finishes from now on.
    pub fn subscribe_outcomes(&self) -> broadcast::Receiver<RefreshOutcome> {
        self.inner.outcomes.subscribe()
    }

    /// Subscribe to `watcher` and launch a refresh round per event.
    ///
    /// A failing connectivity stream is logged and ends the subscription;
    /// there is no resubscription. The listener does not keep `scope`
    /// alive: dropping the last handle to it stops the listener. Returns
    /// `false` if the scope was already cancelled.
    pub fn watch_connectivity(&self, watcher: &dyn ConnectivityWatcher, scope: &LifecycleScope) -> bool {
        let mut events = watcher.await_connection();
        let coordinator = self.clone();
        let owner = scope.downgrade();

        scope.spawn(async move {
            while let Some(event) = events.next().await {
                match event {
                    Ok(event) => {
                        let Some(scope) = owner.upgrade() else {
                            return;
                        };
                        debug!(elapsed = ?event.observed_at.elapsed(), "Connectivity established, refreshing");
                        coordinator.refresh_all(&scope, RefreshTrigger::Connectivity);
                    }
                    Err(source) => {
                        let err = DiscoverError::Connectivity(source);
                        error!(error = %err, "Connectivity watcher failed, automatic refresh stopped");
                        return;
                    }
                }
            }
            debug!("Connectivity stream ended");
        })
    }

    /// Launch one refresh per data source, concurrently.
    ///
    /// Returns how many refresh tasks were started.
    pub fn refresh_all(&self, scope: &LifecycleScope, trigger: RefreshTrigger) -> usize {
        let mut launched = 0;
        for source in [&self.inner.popular, &self.inner.trending] {
            if self.launch(scope, source.clone(), trigger) {
                launched += 1;
            }
        }

        if launched == 0 {
            warn!(trigger = %trigger, "Refresh requested after teardown, ignored");
        }
        launched
    }

    fn launch(&self, scope: &LifecycleScope, source: Arc<dyn DataSource>, trigger: RefreshTrigger) -> bool {
        let inner = self.inner.clone();
        scope.spawn(async move {
            let outcome = inner.run(source.as_ref(), trigger).await;
            // No subscribers is fine
            let _ = inner.outcomes.send(outcome);
        })
    }
}

impl CoordinatorInner {
    async fn run(&self, source: &dyn DataSource, trigger: RefreshTrigger) -> RefreshOutcome {
        let kind = source.kind();
        let result = self.refresh(source, kind).await;

        match &result {
            Ok(()) => info!(source = %kind, trigger = %trigger, page = %self.page, "Refreshed {} shows", kind),
            Err(err) => error!(
                source = %kind,
                trigger = %trigger,
                category = %err.category(),
                error = %err,
                "Error while refreshing {} shows",
                kind
            ),
        }

        RefreshOutcome::new(kind, trigger, result)
    }

    async fn refresh(&self, source: &dyn DataSource, kind: SourceKind) -> Result<(), DiscoverError> {
        let attempt = source.refresh(self.page);
        let result = match self.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, attempt).await {
                Ok(result) => result,
                Err(_) => return Err(DiscoverError::RefreshTimeout { kind, timeout }),
            },
            None => attempt.await,
        };
        result.map_err(|source| DiscoverError::refresh(kind, source))
    }
}
