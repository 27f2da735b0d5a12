//! Result type alias for Discover operations.

use super::discover_error::DiscoverError;

/// Type alias for Results using [`DiscoverError`].
pub type DiscoverResult<T> = Result<T, DiscoverError>;
