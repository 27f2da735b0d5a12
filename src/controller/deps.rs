//! Collaborators handed to the screen controller by the composition root.

use std::sync::Arc;

use crate::adapters::TracingObserver;
use crate::traits::{ConnectivityWatcher, DataSource, ImageResolutionProvider, StateObserver};

/// Everything a [`super::ScreenController`] depends on, passed explicitly.
#[derive(Clone)]
pub struct DiscoverDeps {
    pub trending: Arc<dyn DataSource>,
    pub popular: Arc<dyn DataSource>,
    pub images: Arc<dyn ImageResolutionProvider>,
    pub connectivity: Arc<dyn ConnectivityWatcher>,
    pub observer: Arc<dyn StateObserver>,
}

impl DiscoverDeps {
    /// Dependencies with a [`TracingObserver`] as the state observer.
    pub fn new(
        trending: Arc<dyn DataSource>,
        popular: Arc<dyn DataSource>,
        images: Arc<dyn ImageResolutionProvider>,
        connectivity: Arc<dyn ConnectivityWatcher>,
    ) -> Self {
        Self {
            trending,
            popular,
            images,
            connectivity,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn StateObserver>) -> Self {
        self.observer = observer;
        self
    }
}
