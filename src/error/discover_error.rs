//! Unified error type for the Discover screen core.

use std::time::Duration;

use thiserror::Error;

use super::category::ErrorCategory;
use super::source::SourceError;
use crate::models::{SourceKind, StreamSlot};

/// Every failure the Discover core can observe.
///
/// Only [`DiscoverError::Upstream`] is terminal: it ends the aggregated
/// state stream. Refresh and connectivity failures are logged and swallowed
/// by the refresh coordinator.
#[derive(Debug, Clone, Error)]
pub enum DiscoverError {
    /// One of the three combined feeds terminated with an error.
    #[error("{slot} stream failed: {source}")]
    Upstream {
        slot: StreamSlot,
        #[source]
        source: SourceError,
    },

    /// A data source refresh failed.
    #[error("error while refreshing {kind} shows: {source}")]
    Refresh {
        kind: SourceKind,
        #[source]
        source: SourceError,
    },

    /// A data source refresh did not finish within the configured timeout.
    #[error("refresh of {kind} shows timed out after {timeout:?}")]
    RefreshTimeout { kind: SourceKind, timeout: Duration },

    /// The connectivity watcher stream failed.
    #[error("connectivity watcher failed: {0}")]
    Connectivity(#[source] SourceError),

    /// Configuration could not be parsed or is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DiscoverError {
    pub fn upstream(slot: StreamSlot, source: SourceError) -> Self {
        DiscoverError::Upstream { slot, source }
    }

    pub fn refresh(kind: SourceKind, source: SourceError) -> Self {
        DiscoverError::Refresh { kind, source }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DiscoverError::Upstream { source, .. } | DiscoverError::Refresh { source, .. } => {
                source.category()
            }
            DiscoverError::RefreshTimeout { .. } | DiscoverError::Connectivity(_) => {
                ErrorCategory::Network
            }
            DiscoverError::Config(_) => ErrorCategory::Configuration,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Whether this error ends the aggregated state stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DiscoverError::Upstream { .. })
    }

    /// Source kind involved in a refresh failure, if any.
    pub fn source_kind(&self) -> Option<SourceKind> {
        match self {
            DiscoverError::Refresh { kind, .. } | DiscoverError::RefreshTimeout { kind, .. } => {
                Some(*kind)
            }
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            DiscoverError::Upstream { slot, .. } => {
                format!("Couldn't load {} right now.", slot)
            }
            DiscoverError::Refresh { kind, .. } | DiscoverError::RefreshTimeout { kind, .. } => {
                format!("Couldn't update {} shows. Showing saved results.", kind)
            }
            DiscoverError::Connectivity(_) => {
                "Lost track of the network connection. Reopen the screen to retry.".to_string()
            }
            DiscoverError::Config(message) => format!("Invalid configuration: {}", message),
        }
    }
}
