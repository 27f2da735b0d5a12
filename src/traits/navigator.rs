//! Navigation target for Discover screen intents.

use crate::models::{Show, TransitionHint};

/// Receives navigation intents forwarded by the screen controller.
pub trait DiscoverNavigator: Send + Sync {
    /// Open the full trending listing.
    fn show_trending(&self, hint: Option<TransitionHint>);

    /// Open the full popular listing.
    fn show_popular(&self, hint: Option<TransitionHint>);

    /// Open the details screen for `show`.
    fn show_details(&self, show: &Show, hint: Option<TransitionHint>);
}
