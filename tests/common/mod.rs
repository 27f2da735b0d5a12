//! Common test utilities for integration tests.
//!
//! ```ignore
//! let harness = Harness::start(DiscoverConfig::default());
//! harness.seed_all();
//! let state = harness.state_number(1).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use discover::adapters::mock::{
    MockConnectivity, MockDataSource, MockImageProvider, MockNavigator, RecordingObserver,
};
use discover::config::DiscoverConfig;
use discover::controller::{DiscoverDeps, ScreenController};
use discover::models::{ImageStrategy, Show, ShowList, SourceKind};
use discover::refresh::RefreshOutcome;
use discover::view_state::DiscoverViewState;
use tokio::sync::broadcast;

pub const WAIT: Duration = Duration::from_secs(5);

pub fn show(id: i64, title: &str) -> Show {
    Show::new(id, title)
}

pub fn shows(titles: &[&str]) -> ShowList {
    titles
        .iter()
        .zip(1i64..)
        .map(|(title, id)| show(id, title))
        .collect()
}

pub fn strategy(name: &str) -> ImageStrategy {
    ImageStrategy::new(format!("https://images.example.org/{}", name))
        .with_poster_sizes(["w92", "w154", "original"])
}

/// A controller wired to mocks, plus handles to every mock.
pub struct Harness {
    pub trending: Arc<MockDataSource>,
    pub popular: Arc<MockDataSource>,
    pub images: Arc<MockImageProvider>,
    pub connectivity: Arc<MockConnectivity>,
    pub observer: Arc<RecordingObserver>,
    pub navigator: MockNavigator,
    pub controller: ScreenController,
}

impl Harness {
    pub fn start(config: DiscoverConfig) -> Self {
        Self::start_with(config, |_| {})
    }

    /// Start after letting `prepare` configure the mocks.
    pub fn start_with<F>(config: DiscoverConfig, prepare: F) -> Self
    where
        F: FnOnce(&Mocks),
    {
        discover::logging::init_for_tests();

        let mocks = Mocks {
            trending: Arc::new(MockDataSource::new(SourceKind::Trending)),
            popular: Arc::new(MockDataSource::new(SourceKind::Popular)),
            images: Arc::new(MockImageProvider::new()),
            connectivity: Arc::new(MockConnectivity::new()),
            observer: Arc::new(RecordingObserver::new()),
        };
        prepare(&mocks);

        let deps = DiscoverDeps::new(
            mocks.trending.clone(),
            mocks.popular.clone(),
            mocks.images.clone(),
            mocks.connectivity.clone(),
        )
        .with_observer(mocks.observer.clone());
        let controller = ScreenController::new(deps, config);

        Self {
            trending: mocks.trending,
            popular: mocks.popular,
            images: mocks.images,
            connectivity: mocks.connectivity,
            observer: mocks.observer,
            navigator: MockNavigator::new(),
            controller,
        }
    }

    /// Emit one value on each of the three feeds.
    pub fn seed_all(&self) {
        self.trending.emit(shows(&["A"]));
        self.popular.emit(shows(&["X"]));
        self.images.emit(strategy("s1"));
    }

    /// Wait until the observer has seen `count` states and return the last.
    pub async fn state_number(&self, count: usize) -> DiscoverViewState {
        assert!(
            self.observer.wait_for_states(count).await,
            "expected {} states, observed {}",
            count,
            self.observer.states().len()
        );
        self.observer.states()[count - 1].clone()
    }

    /// Wait until the connectivity listener and aggregator are subscribed.
    pub async fn wait_until_wired(&self) {
        assert!(self.connectivity.wait_for_subscribers(1).await);
        assert!(self.trending.wait_for_subscribers(1).await);
        assert!(self.popular.wait_for_subscribers(1).await);
        assert!(self.images.wait_for_subscribers(1).await);
    }
}

pub struct Mocks {
    pub trending: Arc<MockDataSource>,
    pub popular: Arc<MockDataSource>,
    pub images: Arc<MockImageProvider>,
    pub connectivity: Arc<MockConnectivity>,
    pub observer: Arc<RecordingObserver>,
}

/// Receive `count` refresh outcomes or panic after [`WAIT`].
pub async fn outcomes(
    rx: &mut broadcast::Receiver<RefreshOutcome>,
    count: usize,
) -> Vec<RefreshOutcome> {
    let mut received = Vec::with_capacity(count);
    for _ in 0..count {
        let outcome = tokio::time::timeout(WAIT, rx.recv())
            .await
            .expect("refresh outcome within timeout")
            .expect("outcome channel open");
        received.push(outcome);
    }
    received
}
