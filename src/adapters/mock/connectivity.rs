//! Mock connectivity watcher.

use super::feed::MockFeed;
use crate::error::SourceError;
use crate::models::ConnectivityEvent;
use crate::traits::{ConnectivityWatcher, SourceStream};

/// Connectivity watcher driven by the test.
///
/// Events are not replayed: only subscribers present when
/// [`MockConnectivity::connect`] is called receive the event.
#[derive(Clone)]
pub struct MockConnectivity {
    feed: MockFeed<ConnectivityEvent>,
}

impl MockConnectivity {
    pub fn new() -> Self {
        Self {
            feed: MockFeed::live(),
        }
    }

    /// Signal that connectivity was established.
    pub fn connect(&self) {
        self.feed.emit(ConnectivityEvent::now());
    }

    /// Fail the connectivity stream of every current subscriber.
    pub fn fail(&self, error: SourceError) {
        self.feed.fail(error);
    }

    /// End every subscriber's stream without an error.
    pub fn close(&self) {
        self.feed.close();
    }

    pub fn subscriber_count(&self) -> usize {
        self.feed.subscriber_count()
    }

    pub fn subscription_count(&self) -> usize {
        self.feed.subscription_count()
    }

    pub async fn wait_for_subscribers(&self, count: usize) -> bool {
        self.feed.wait_for_subscribers(count).await
    }
}

impl Default for MockConnectivity {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityWatcher for MockConnectivity {
    fn await_connection(&self) -> SourceStream<ConnectivityEvent> {
        self.feed.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_connect_reaches_current_subscribers_only() {
        let watcher = MockConnectivity::new();
        watcher.connect();

        let mut events = watcher.await_connection();
        assert!(futures::poll!(events.next()).is_pending());

        watcher.connect();
        assert!(matches!(events.next().await, Some(Ok(_))));
        assert_eq!(watcher.subscription_count(), 1);
    }

    #[tokio::test]
    async fn test_close_ends_stream() {
        let watcher = MockConnectivity::new();
        let mut events = watcher.await_connection();
        watcher.close();
        assert!(events.next().await.is_none());
        assert_eq!(watcher.subscriber_count(), 0);
    }
}
