//! Image resolution strategy provider.

use super::SourceStream;
use crate::models::ImageStrategy;

/// Publishes the current image resolution strategy.
pub trait ImageResolutionProvider: Send + Sync {
    /// Continuous stream of strategies; replays the current one on subscribe.
    fn stream(&self) -> SourceStream<ImageStrategy>;
}
