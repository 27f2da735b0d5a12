//! Mock navigator recording every forwarded intent.

use std::sync::Mutex;

use super::lock;
use crate::models::{Show, TransitionHint};
use crate::traits::DiscoverNavigator;

/// A navigation intent as received by [`MockNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCall {
    Trending(Option<TransitionHint>),
    Popular(Option<TransitionHint>),
    Details(Show, Option<TransitionHint>),
}

#[derive(Debug, Default)]
pub struct MockNavigator {
    calls: Mutex<Vec<NavigationCall>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<NavigationCall> {
        lock(&self.calls).clone()
    }

    pub fn clear(&self) {
        lock(&self.calls).clear();
    }
}

impl DiscoverNavigator for MockNavigator {
    fn show_trending(&self, hint: Option<TransitionHint>) {
        lock(&self.calls).push(NavigationCall::Trending(hint));
    }

    fn show_popular(&self, hint: Option<TransitionHint>) {
        lock(&self.calls).push(NavigationCall::Popular(hint));
    }

    fn show_details(&self, show: &Show, hint: Option<TransitionHint>) {
        lock(&self.calls).push(NavigationCall::Details(show.clone(), hint));
    }
}
