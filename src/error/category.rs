//! Error category classification.
//!
//! Categories drive the handling decisions callers make (retry, log, surface)
//! without matching on every concrete variant.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connectivity problems and timeouts.
    /// Generally transient and retryable.
    Network,

    /// Backend-side failures reported by a data source.
    /// Generally transient and retryable after delay.
    Server,

    /// Local storage or cache failures inside a data source.
    Storage,

    /// Programming errors or broken collaborator contracts.
    /// Not retryable.
    Client,

    /// Invalid or unreadable configuration.
    /// Not retryable until the configuration is corrected.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label suitable for structured log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Storage => "storage",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// User-facing description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Server => "Server-side issue",
            ErrorCategory::Storage => "Local storage issue",
            ErrorCategory::Client => "Application error",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
