//! Navigation intents. Pure forwarding to the navigator.

use super::ScreenController;
use crate::models::{Show, TransitionHint};
use crate::traits::DiscoverNavigator;

impl ScreenController {
    pub fn on_trending_header_activated(
        &self,
        navigator: &dyn DiscoverNavigator,
        hint: Option<TransitionHint>,
    ) {
        navigator.show_trending(hint);
    }

    pub fn on_popular_header_activated(
        &self,
        navigator: &dyn DiscoverNavigator,
        hint: Option<TransitionHint>,
    ) {
        navigator.show_popular(hint);
    }

    pub fn on_item_activated(
        &self,
        navigator: &dyn DiscoverNavigator,
        show: &Show,
        hint: Option<TransitionHint>,
    ) {
        navigator.show_details(show, hint);
    }
}
