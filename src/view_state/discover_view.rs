//! Aggregate view state for the Discover screen.

use crate::models::{ImageStrategy, Show, ShowList, SourceKind};

/// Immutable snapshot of everything the Discover screen renders.
///
/// Only the state aggregator builds these, and only once all three feeds
/// have produced a value, so every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverViewState {
    trending: ShowList,
    popular: ShowList,
    image_strategy: ImageStrategy,
}

impl DiscoverViewState {
    pub fn new(trending: ShowList, popular: ShowList, image_strategy: ImageStrategy) -> Self {
        Self {
            trending,
            popular,
            image_strategy,
        }
    }

    pub fn trending(&self) -> &[Show] {
        &self.trending
    }

    pub fn popular(&self) -> &[Show] {
        &self.popular
    }

    pub fn image_strategy(&self) -> &ImageStrategy {
        &self.image_strategy
    }

    /// Shows listed under the given section.
    pub fn section(&self, kind: SourceKind) -> &[Show] {
        match kind {
            SourceKind::Trending => &self.trending,
            SourceKind::Popular => &self.popular,
        }
    }

    /// True when both sections are empty.
    pub fn is_empty(&self) -> bool {
        self.trending.is_empty() && self.popular.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.trending.len() + self.popular.len()
    }
}

impl From<(ShowList, ShowList, ImageStrategy)> for DiscoverViewState {
    fn from((trending, popular, image_strategy): (ShowList, ShowList, ImageStrategy)) -> Self {
        Self::new(trending, popular, image_strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DiscoverViewState {
        DiscoverViewState::new(
            vec![Show::new(1, "A"), Show::new(2, "B")],
            vec![Show::new(3, "X")],
            ImageStrategy::new("https://img"),
        )
    }

    #[test]
    fn test_sections() {
        let state = state();
        assert_eq!(state.section(SourceKind::Trending), state.trending());
        assert_eq!(state.section(SourceKind::Popular)[0].title, "X");
        assert_eq!(state.total_items(), 3);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_empty_state() {
        let empty = DiscoverViewState::from((Vec::new(), Vec::new(), ImageStrategy::new("x")));
        assert!(empty.is_empty());
        assert_eq!(empty.total_items(), 0);
    }
}
