//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockDataSource`] - listing injection, refresh recording, failure and pause switches
//! - [`MockImageProvider`] - strategy injection
//! - [`MockConnectivity`] - connectivity events on demand
//! - [`MockNavigator`] - records forwarded navigation intents
//! - [`RecordingObserver`] - records published states and errors

pub mod connectivity;
pub mod data_source;
pub mod feed;
pub mod image_provider;
pub mod navigator;
pub mod observer;

pub use connectivity::MockConnectivity;
pub use data_source::MockDataSource;
pub use feed::MockFeed;
pub use image_provider::MockImageProvider;
pub use navigator::{MockNavigator, NavigationCall};
pub use observer::RecordingObserver;

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;

/// Upper bound for every `wait_for_*` helper.
const WAIT_TIMEOUT: Duration = Duration::from_secs(5);

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Re-check `ready` on every change notification until it holds or
/// [`WAIT_TIMEOUT`] elapses.
async fn wait_until<F>(mut changes: watch::Receiver<usize>, ready: F) -> bool
where
    F: Fn() -> bool,
{
    let wait = async {
        loop {
            changes.borrow_and_update();
            if ready() {
                return;
            }
            if changes.changed().await.is_err() {
                return;
            }
        }
    };
    tokio::time::timeout(WAIT_TIMEOUT, wait).await.is_ok() && ready()
}
