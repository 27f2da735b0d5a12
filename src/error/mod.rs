//! Error handling for the Discover screen core.
//!
//! - [`SourceError`]: failures reported by external collaborators
//! - [`DiscoverError`]: unified error observed by the core
//! - [`ErrorCategory`]: high-level classification for handling decisions
//! - [`DiscoverResult`]: result alias
//!
//! | Kind | Origin | Effect |
//! |------|--------|--------|
//! | Upstream | trending/popular/image stream | terminates the state stream |
//! | Refresh / RefreshTimeout | `DataSource::refresh` | logged, ignored |
//! | Connectivity | connectivity watcher stream | logged, refreshes stop |
//! | Config | configuration loading | returned to the caller |

mod category;
mod discover_error;
mod result;
mod source;

pub use category::ErrorCategory;
pub use discover_error::DiscoverError;
pub use result::DiscoverResult;
pub use source::SourceError;
