//! Trait abstractions for the Discover screen's collaborators.
//!
//! The core never owns these collaborators' behaviour; it only holds shared
//! references handed in by the composition root, which keeps every seam
//! mockable in tests.
//!
//! # Traits
//!
//! - [`DataSource`] - trending/popular show listings with refresh
//! - [`ImageResolutionProvider`] - current image resolution strategy
//! - [`ConnectivityWatcher`] - connectivity-established events
//! - [`DiscoverNavigator`] - navigation target for user intents
//! - [`StateObserver`] - presentation hook for state and terminal errors

pub mod connectivity;
pub mod data_source;
pub mod image_provider;
pub mod navigator;
pub mod observer;

pub use connectivity::ConnectivityWatcher;
pub use data_source::DataSource;
pub use image_provider::ImageResolutionProvider;
pub use navigator::DiscoverNavigator;
pub use observer::StateObserver;

use futures::stream::BoxStream;

use crate::error::SourceError;

/// Continuous stream of values from a collaborator.
pub type SourceStream<T> = BoxStream<'static, Result<T, SourceError>>;
