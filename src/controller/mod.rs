//! Screen controller for the Discover screen.
//!
//! Owns the lifecycle scope, the state aggregator subscription and the
//! refresh coordinator. Everything it starts is torn down with it.
//!
//! # Usage
//!
//! ```rust,ignore
//! let deps = DiscoverDeps::new(trending, popular, images, network)
//!     .with_observer(observer);
//! let controller = ScreenController::new(deps, DiscoverConfig::default());
//!
//! let mut states = controller.subscribe();
//! states.changed().await?;
//!
//! controller.on_item_activated(&navigator, &show, None);
//! controller.teardown();
//! ```

mod deps;
mod navigation;

pub use deps::DiscoverDeps;

use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use crate::aggregator::StateAggregator;
use crate::config::DiscoverConfig;
use crate::lifecycle::LifecycleScope;
use crate::models::SourceKind;
use crate::presentation::spawn_presenter;
use crate::refresh::{RefreshCoordinator, RefreshOutcome, RefreshTrigger};
use crate::traits::ConnectivityWatcher;
use crate::view_state::DiscoverViewState;

pub struct ScreenController {
    config: DiscoverConfig,
    scope: LifecycleScope,
    state_rx: watch::Receiver<Option<DiscoverViewState>>,
    coordinator: RefreshCoordinator,
}

impl ScreenController {
    /// Wire the aggregator, then start the refresh path.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(deps: DiscoverDeps, config: DiscoverConfig) -> Self {
        check_kind(deps.trending.kind(), SourceKind::Trending);
        check_kind(deps.popular.kind(), SourceKind::Popular);

        let scope = LifecycleScope::new("discover");
        let (state_tx, state_rx) = watch::channel(None);

        let presenter = spawn_presenter(&scope, state_tx, deps.observer.clone());
        let aggregator = StateAggregator::new(
            deps.trending.clone(),
            deps.popular.clone(),
            deps.images.clone(),
            config.page,
        );
        aggregator.attach(&scope, presenter);

        let coordinator = RefreshCoordinator::new(deps.trending, deps.popular, &config);

        let controller = Self {
            config,
            scope,
            state_rx,
            coordinator,
        };
        controller.refresh(deps.connectivity.as_ref());

        info!(page = %controller.config.page, "Discover controller started");
        controller
    }

    fn refresh(&self, connectivity: &dyn ConnectivityWatcher) {
        self.coordinator.watch_connectivity(connectivity, &self.scope);
        if self.config.refresh_on_start {
            self.coordinator.refresh_all(&self.scope, RefreshTrigger::Startup);
        }
    }

    /// Latest published state; `None` until all three feeds have emitted.
    pub fn current_state(&self) -> Option<DiscoverViewState> {
        self.state_rx.borrow().clone()
    }

    /// Receiver for the latest-state holder.
    ///
    /// `changed()` fails once the controller is torn down.
    pub fn subscribe(&self) -> watch::Receiver<Option<DiscoverViewState>> {
        self.state_rx.clone()
    }

    pub fn subscribe_refresh_outcomes(&self) -> broadcast::Receiver<RefreshOutcome> {
        self.coordinator.subscribe_outcomes()
    }

    /// Launch a refresh round now, regardless of connectivity.
    ///
    /// Returns the number of refreshes started (0 after teardown).
    pub fn refresh_now(&self) -> usize {
        self.coordinator.refresh_all(&self.scope, RefreshTrigger::Manual)
    }

    pub fn config(&self) -> &DiscoverConfig {
        &self.config
    }

    /// Cancel every subscription and in-flight refresh.
    ///
    /// Returns `true` for the call that performed the teardown.
    pub fn teardown(&self) -> bool {
        let torn_down = self.scope.cancel();
        if torn_down {
            info!("Discover controller torn down");
        }
        torn_down
    }

    pub fn is_torn_down(&self) -> bool {
        self.scope.is_cancelled()
    }
}

impl Drop for ScreenController {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn check_kind(actual: SourceKind, expected: SourceKind) {
    if actual != expected {
        warn!(%actual, %expected, "Data source wired to the wrong Discover section");
    }
}
