//! Builds the Discover view state from its three upstream feeds.

use std::sync::Arc;

use futures::stream::{BoxStream, StreamExt, TryStreamExt};

use super::combine_latest::combine_latest;
use crate::error::{DiscoverError, DiscoverResult};
use crate::lifecycle::LifecycleScope;
use crate::models::{Page, StreamSlot};
use crate::presentation::Presenter;
use crate::traits::{DataSource, ImageResolutionProvider};
use crate::view_state::DiscoverViewState;

/// Combine-latest of the trending list, the popular list and the image
/// strategy.
pub struct StateAggregator {
    trending: Arc<dyn DataSource>,
    popular: Arc<dyn DataSource>,
    images: Arc<dyn ImageResolutionProvider>,
    page: Page,
}

impl StateAggregator {
    pub fn new(
        trending: Arc<dyn DataSource>,
        popular: Arc<dyn DataSource>,
        images: Arc<dyn ImageResolutionProvider>,
        page: Page,
    ) -> Self {
        Self {
            trending,
            popular,
            images,
            page,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Subscribe to all three feeds and return the combined state stream.
    ///
    /// Upstream errors are tagged with the slot they came from and end the
    /// stream.
    pub fn states(&self) -> BoxStream<'static, DiscoverResult<DiscoverViewState>> {
        let trending = self
            .trending
            .stream(self.page)
            .map_err(|source| DiscoverError::upstream(StreamSlot::Trending, source))
            .boxed();
        let popular = self
            .popular
            .stream(self.page)
            .map_err(|source| DiscoverError::upstream(StreamSlot::Popular, source))
            .boxed();
        let images = self
            .images
            .stream()
            .map_err(|source| DiscoverError::upstream(StreamSlot::ImageStrategy, source))
            .boxed();

        combine_latest(trending, popular, images)
            .map_ok(DiscoverViewState::from)
            .boxed()
    }

    /// Pump combined states into `presenter` from a task owned by `scope`.
    ///
    /// Returns `false` if the scope was already cancelled.
    pub fn attach(&self, scope: &LifecycleScope, presenter: Presenter) -> bool {
        let mut states = self.states();
        let page = self.page;
        let owner = scope.downgrade();

        scope.spawn(async move {
            while let Some(next) = states.next().await {
                if owner.is_cancelled() {
                    break;
                }
                match next {
                    Ok(state) => {
                        tracing::trace!(
                            trending = state.trending().len(),
                            popular = state.popular().len(),
                            "Discover state combined"
                        );
                        if !presenter.publish(state) {
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::error!(page = %page, error = %error, "Discover state stream terminated");
                        presenter.fail(error);
                        return;
                    }
                }
            }
            tracing::debug!(page = %page, "Discover state stream completed");
        })
    }
}
