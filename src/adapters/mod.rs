//! Concrete implementations of the collaborator traits.
//!
//! # Adapters
//!
//! - [`InMemoryShowSource`] - data source caching listings in memory, filled by a [`ShowFetcher`]
//! - [`StaticImageProvider`] - settable image strategy
//! - [`NetworkState`] - connectivity watcher driven by a connected flag
//! - [`TracingObserver`] - state observer that only logs
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles with value injection,
//! call recording and failure switches.

pub mod memory;
pub mod mock;
pub mod tracing_observer;

pub use memory::{InMemoryShowSource, NetworkState, ShowFetcher, StaticImageProvider};
pub use mock::{MockConnectivity, MockDataSource, MockImageProvider, MockNavigator, RecordingObserver};
pub use tracing_observer::TracingObserver;

use futures::stream::{self, StreamExt};
use tokio::sync::watch;

use crate::traits::SourceStream;

/// Stream the populated values of a watch channel.
///
/// Yields the current value first when present (replay-latest), then every
/// later value. Ends when the sender is dropped.
pub(crate) fn watch_values<T>(rx: watch::Receiver<Option<T>>) -> SourceStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        loop {
            let current = rx.borrow_and_update().clone();
            if let Some(value) = current {
                return Some((Ok(value), (rx, false)));
            }
            if rx.changed().await.is_err() {
                return None;
            }
        }
    })
    .boxed()
}
