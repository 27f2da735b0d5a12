//! Prelude module for convenient imports.
//!
//! ```ignore
//! use discover::prelude::*;
//! ```

// Controller and configuration
pub use crate::config::DiscoverConfig;
pub use crate::controller::{DiscoverDeps, ScreenController};

// Model types
pub use crate::models::{ConnectivityEvent, ImageStrategy, Page, Show, ShowList, SourceKind, TransitionHint};
pub use crate::view_state::DiscoverViewState;

// Errors
pub use crate::error::{DiscoverError, DiscoverResult, SourceError};

// Collaborator traits
pub use crate::traits::{
    ConnectivityWatcher, DataSource, DiscoverNavigator, ImageResolutionProvider, SourceStream,
    StateObserver,
};

// Refresh reporting
pub use crate::refresh::{RefreshOutcome, RefreshTrigger};
