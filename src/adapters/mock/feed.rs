//! Injectable value feed shared by the mock collaborators.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tokio::sync::mpsc;

use super::{lock, WAIT_TIMEOUT};
use crate::error::SourceError;
use crate::traits::SourceStream;

type FeedSender<T> = mpsc::UnboundedSender<Result<T, SourceError>>;

/// A feed whose values are pushed by the test.
///
/// A replaying feed hands its latest value to every new subscriber; a live
/// feed only delivers what is emitted after subscribing.
pub struct MockFeed<T> {
    state: Arc<Mutex<FeedState<T>>>,
}

struct FeedState<T> {
    replay: bool,
    latest: Option<T>,
    subscribers: Vec<FeedSender<T>>,
    closed: bool,
    subscriptions: usize,
}

impl<T> MockFeed<T>
where
    T: Clone + Send + 'static,
{
    pub fn replaying() -> Self {
        Self::with_replay(true)
    }

    pub fn live() -> Self {
        Self::with_replay(false)
    }

    fn with_replay(replay: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(FeedState {
                replay,
                latest: None,
                subscribers: Vec::new(),
                closed: false,
                subscriptions: 0,
            })),
        }
    }

    /// Deliver `value` to every current subscriber.
    pub fn emit(&self, value: T) {
        let mut state = lock(&self.state);
        if state.replay {
            state.latest = Some(value.clone());
        }
        state
            .subscribers
            .retain(|tx| tx.send(Ok(value.clone())).is_ok());
    }

    /// Deliver `error` to every current subscriber and end their streams.
    pub fn fail(&self, error: SourceError) {
        let mut state = lock(&self.state);
        for tx in state.subscribers.drain(..) {
            let _ = tx.send(Err(error.clone()));
        }
    }

    /// End every current and future subscription.
    pub fn close(&self) {
        let mut state = lock(&self.state);
        state.closed = true;
        state.subscribers.clear();
    }

    pub fn subscribe(&self) -> SourceStream<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        {
            let mut state = lock(&self.state);
            state.subscriptions += 1;
            if let Some(latest) = state.latest.clone() {
                let _ = tx.send(Ok(latest));
            }
            if !state.closed {
                state.subscribers.push(tx);
            }
        }

        stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|item| (item, rx))
        })
        .boxed()
    }

    /// Subscribers whose stream is still alive.
    pub fn subscriber_count(&self) -> usize {
        let mut state = lock(&self.state);
        state.subscribers.retain(|tx| !tx.is_closed());
        state.subscribers.len()
    }

    /// Total subscriptions ever made.
    pub fn subscription_count(&self) -> usize {
        lock(&self.state).subscriptions
    }

    pub fn latest(&self) -> Option<T> {
        lock(&self.state).latest.clone()
    }

    /// Wait until exactly `count` subscribers are alive.
    pub async fn wait_for_subscribers(&self, count: usize) -> bool {
        let wait = async {
            while self.subscriber_count() != count {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        };
        tokio::time::timeout(WAIT_TIMEOUT, wait).await.is_ok()
    }
}

impl<T> Clone for MockFeed<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
