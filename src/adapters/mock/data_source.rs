//! Mock data source.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::watch;

use super::feed::MockFeed;
use super::{lock, wait_until};
use crate::error::SourceError;
use crate::models::{Page, ShowList, SourceKind};
use crate::traits::{DataSource, SourceStream};

/// Mock data source for testing.
///
/// This mock allows:
/// - Emitting listings and stream errors to subscribers
/// - Recording refresh calls and the pages they asked for
/// - Failing refreshes with a configured error
/// - Holding refreshes mid-flight until resumed
/// - Publishing a listing when a refresh succeeds, like a real store would
///
/// # Example
///
/// ```ignore
/// use discover::adapters::mock::MockDataSource;
///
/// let popular = MockDataSource::new(SourceKind::Popular);
/// popular.emit(vec![Show::new(1, "Severance")]);
/// popular.set_refresh_error(Some(SourceError::network("offline")));
///
/// assert!(popular.refresh(Page::FIRST).await.is_err());
/// assert_eq!(popular.refresh_calls(), 1);
/// ```
pub struct MockDataSource {
    kind: SourceKind,
    feed: MockFeed<ShowList>,
    subscribed_pages: Mutex<Vec<Page>>,
    refreshed_pages: Mutex<Vec<Page>>,
    refresh_calls: AtomicUsize,
    refresh_completions: AtomicUsize,
    calls_tx: watch::Sender<usize>,
    paused_tx: watch::Sender<bool>,
    refresh_error: Mutex<Option<SourceError>>,
    refresh_payload: Mutex<Option<ShowList>>,
}

impl MockDataSource {
    pub fn new(kind: SourceKind) -> Self {
        let (calls_tx, _) = watch::channel(0);
        let (paused_tx, _) = watch::channel(false);
        Self {
            kind,
            feed: MockFeed::replaying(),
            subscribed_pages: Mutex::new(Vec::new()),
            refreshed_pages: Mutex::new(Vec::new()),
            refresh_calls: AtomicUsize::new(0),
            refresh_completions: AtomicUsize::new(0),
            calls_tx,
            paused_tx,
            refresh_error: Mutex::new(None),
            refresh_payload: Mutex::new(None),
        }
    }

    /// Publish a listing to every subscriber.
    pub fn emit(&self, shows: ShowList) {
        self.feed.emit(shows);
    }

    /// Terminate every subscriber's stream with `error`.
    pub fn fail(&self, error: SourceError) {
        self.feed.fail(error);
    }

    /// Configure the error returned by subsequent refreshes (`None` succeeds).
    pub fn set_refresh_error(&self, error: Option<SourceError>) {
        *lock(&self.refresh_error) = error;
    }

    /// Listing emitted whenever a refresh succeeds.
    pub fn set_refresh_payload(&self, shows: Option<ShowList>) {
        *lock(&self.refresh_payload) = shows;
    }

    /// Hold refreshes mid-flight until [`Self::resume_refreshes`].
    pub fn pause_refreshes(&self) {
        self.paused_tx.send_replace(true);
    }

    pub fn resume_refreshes(&self) {
        self.paused_tx.send_replace(false);
    }

    /// Number of refresh calls started.
    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    /// Number of refresh calls that returned, successfully or not.
    pub fn refresh_completions(&self) -> usize {
        self.refresh_completions.load(Ordering::SeqCst)
    }

    pub fn refreshed_pages(&self) -> Vec<Page> {
        lock(&self.refreshed_pages).clone()
    }

    pub fn subscribed_pages(&self) -> Vec<Page> {
        lock(&self.subscribed_pages).clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.feed.subscriber_count()
    }

    pub async fn wait_for_subscribers(&self, count: usize) -> bool {
        self.feed.wait_for_subscribers(count).await
    }

    /// Wait until at least `count` refresh calls have started.
    pub async fn wait_for_refresh_calls(&self, count: usize) -> bool {
        wait_until(self.calls_tx.subscribe(), || self.refresh_calls() >= count).await
    }

    async fn wait_while_paused(&self) {
        let mut paused = self.paused_tx.subscribe();
        loop {
            if !*paused.borrow_and_update() {
                return;
            }
            if paused.changed().await.is_err() {
                return;
            }
        }
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn stream(&self, page: Page) -> SourceStream<ShowList> {
        lock(&self.subscribed_pages).push(page);
        self.feed.subscribe()
    }

    async fn refresh(&self, page: Page) -> Result<(), SourceError> {
        lock(&self.refreshed_pages).push(page);
        let calls = self.refresh_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.calls_tx.send_replace(calls);

        self.wait_while_paused().await;
        self.refresh_completions.fetch_add(1, Ordering::SeqCst);

        let error = lock(&self.refresh_error).clone();
        if let Some(error) = error {
            return Err(error);
        }

        let payload = lock(&self.refresh_payload).clone();
        if let Some(shows) = payload {
            self.feed.emit(shows);
        }
        Ok(())
    }
}
