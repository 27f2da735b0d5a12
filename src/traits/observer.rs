//! Presentation hook for the Discover screen.

use crate::error::DiscoverError;
use crate::view_state::DiscoverViewState;

/// Notified on the presentation task whenever the view state changes.
///
/// Calls are strictly sequential and in emission order.
pub trait StateObserver: Send + Sync {
    /// A new aggregate state was published.
    fn on_state_changed(&self, state: &DiscoverViewState);

    /// The state stream terminated with an error. No more states follow.
    fn on_error(&self, error: &DiscoverError) {
        tracing::error!(error = %error, category = %error.category(), "Discover state stream failed");
    }
}
