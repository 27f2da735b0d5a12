//! Connectivity watcher.

use super::SourceStream;
use crate::models::ConnectivityEvent;

/// Signals when network connectivity becomes available.
pub trait ConnectivityWatcher: Send + Sync {
    /// Stream of connectivity-established events.
    ///
    /// Emits immediately when already connected, then again every time the
    /// connection is re-established.
    fn await_connection(&self) -> SourceStream<ConnectivityEvent>;
}
