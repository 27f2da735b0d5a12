//! State observer that only logs.

use crate::error::DiscoverError;
use crate::traits::StateObserver;
use crate::view_state::DiscoverViewState;

/// Default observer for controllers whose consumer polls
/// `ScreenController::current_state` or subscribes to the state channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StateObserver for TracingObserver {
    fn on_state_changed(&self, state: &DiscoverViewState) {
        tracing::debug!(
            trending = state.trending().len(),
            popular = state.popular().len(),
            images = %state.image_strategy().base_url,
            "Discover state changed"
        );
    }

    fn on_error(&self, error: &DiscoverError) {
        tracing::error!(
            error = %error,
            category = %error.category(),
            "Discover state stream failed"
        );
    }
}
