//! In-memory adapters.
//!
//! Listings are cached per page in watch channels, which gives the
//! replay-latest behaviour the aggregator expects from a data source.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tokio::sync::watch;

use super::watch_values;
use crate::error::SourceError;
use crate::models::{ConnectivityEvent, ImageStrategy, Page, ShowList, SourceKind};
use crate::traits::{ConnectivityWatcher, DataSource, ImageResolutionProvider, SourceStream};

/// Fetches a fresh listing from wherever the shows live.
#[async_trait]
pub trait ShowFetcher: Send + Sync {
    async fn fetch(&self, kind: SourceKind, page: Page) -> Result<ShowList, SourceError>;
}

/// Data source caching each page in memory.
///
/// `refresh` fetches through the [`ShowFetcher`] and stores the result;
/// subscribers of that page see the new listing. A failed fetch leaves the
/// cached listing untouched.
pub struct InMemoryShowSource {
    kind: SourceKind,
    fetcher: Arc<dyn ShowFetcher>,
    pages: Mutex<HashMap<Page, watch::Sender<Option<ShowList>>>>,
}

impl InMemoryShowSource {
    pub fn new(kind: SourceKind, fetcher: Arc<dyn ShowFetcher>) -> Self {
        Self {
            kind,
            fetcher,
            pages: Mutex::new(HashMap::new()),
        }
    }

    /// Replace the cached listing for `page`.
    pub fn store(&self, page: Page, shows: ShowList) {
        let mut pages = self.lock_pages();
        let tx = pages
            .entry(page)
            .or_insert_with(|| watch::channel(None).0);
        tx.send_replace(Some(shows));
    }

    pub fn cached(&self, page: Page) -> Option<ShowList> {
        self.lock_pages()
            .get(&page)
            .and_then(|tx| tx.borrow().clone())
    }

    fn lock_pages(&self) -> MutexGuard<'_, HashMap<Page, watch::Sender<Option<ShowList>>>> {
        self.pages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DataSource for InMemoryShowSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn stream(&self, page: Page) -> SourceStream<ShowList> {
        let rx = self
            .lock_pages()
            .entry(page)
            .or_insert_with(|| watch::channel(None).0)
            .subscribe();
        watch_values(rx)
    }

    async fn refresh(&self, page: Page) -> Result<(), SourceError> {
        let shows = self.fetcher.fetch(self.kind, page).await?;
        tracing::debug!(source = %self.kind, page = %page, count = shows.len(), "Storing refreshed shows");
        self.store(page, shows);
        Ok(())
    }
}

/// Image provider holding a strategy that can be swapped at runtime.
pub struct StaticImageProvider {
    tx: watch::Sender<Option<ImageStrategy>>,
}

impl StaticImageProvider {
    pub fn new(strategy: ImageStrategy) -> Self {
        let (tx, _) = watch::channel(Some(strategy));
        Self { tx }
    }

    /// Provider with no strategy yet; subscribers wait for [`Self::set`].
    pub fn pending() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    pub fn set(&self, strategy: ImageStrategy) {
        self.tx.send_replace(Some(strategy));
    }

    pub fn current(&self) -> Option<ImageStrategy> {
        self.tx.borrow().clone()
    }
}

impl ImageResolutionProvider for StaticImageProvider {
    fn stream(&self) -> SourceStream<ImageStrategy> {
        watch_values(self.tx.subscribe())
    }
}

/// Connectivity watcher driven by a connected flag.
///
/// Each subscriber gets an event right away when already connected, then
/// one per disconnected-to-connected transition it observes.
pub struct NetworkState {
    tx: watch::Sender<bool>,
}

impl NetworkState {
    pub fn new(connected: bool) -> Self {
        let (tx, _) = watch::channel(connected);
        Self { tx }
    }

    pub fn set_connected(&self, connected: bool) {
        self.tx.send_if_modified(|current| {
            let changed = *current != connected;
            *current = connected;
            changed
        });
    }

    pub fn is_connected(&self) -> bool {
        *self.tx.borrow()
    }
}

impl ConnectivityWatcher for NetworkState {
    fn await_connection(&self) -> SourceStream<ConnectivityEvent> {
        let rx = self.tx.subscribe();
        stream::unfold((rx, true), |(mut rx, check_current)| async move {
            let mut check = check_current;
            loop {
                if check && *rx.borrow_and_update() {
                    return Some((Ok(ConnectivityEvent::now()), (rx, false)));
                }
                if rx.changed().await.is_err() {
                    return None;
                }
                check = true;
            }
        })
        .boxed()
    }
}
