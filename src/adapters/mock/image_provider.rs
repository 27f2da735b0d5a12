//! Mock image resolution provider.

use super::feed::MockFeed;
use crate::error::SourceError;
use crate::models::ImageStrategy;
use crate::traits::{ImageResolutionProvider, SourceStream};

/// Image provider whose strategies are pushed by the test. Replays the
/// latest strategy to new subscribers.
#[derive(Clone)]
pub struct MockImageProvider {
    feed: MockFeed<ImageStrategy>,
}

impl MockImageProvider {
    pub fn new() -> Self {
        Self {
            feed: MockFeed::replaying(),
        }
    }

    pub fn emit(&self, strategy: ImageStrategy) {
        self.feed.emit(strategy);
    }

    pub fn fail(&self, error: SourceError) {
        self.feed.fail(error);
    }

    pub fn subscriber_count(&self) -> usize {
        self.feed.subscriber_count()
    }

    pub async fn wait_for_subscribers(&self, count: usize) -> bool {
        self.feed.wait_for_subscribers(count).await
    }
}

impl Default for MockImageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageResolutionProvider for MockImageProvider {
    fn stream(&self) -> SourceStream<ImageStrategy> {
        self.feed.subscribe()
    }
}
