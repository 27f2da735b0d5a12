//! Connectivity signal.

use std::time::Instant;

/// Network reachability became available.
///
/// Carries no payload beyond the moment it was observed. A watcher may emit
/// it many times over a controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityEvent {
    pub observed_at: Instant,
}

impl ConnectivityEvent {
    pub fn now() -> Self {
        Self {
            observed_at: Instant::now(),
        }
    }
}

impl Default for ConnectivityEvent {
    fn default() -> Self {
        Self::now()
    }
}
