//! Reports describing finished refresh attempts.

use std::fmt;

use crate::error::DiscoverError;
use crate::models::SourceKind;

/// What started a refresh round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshTrigger {
    /// A connectivity-established event
    Connectivity,
    /// Configured refresh when the controller starts
    Startup,
    /// Explicit request from the screen (e.g. pull-to-refresh)
    Manual,
}

impl RefreshTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshTrigger::Connectivity => "connectivity",
            RefreshTrigger::Startup => "startup",
            RefreshTrigger::Manual => "manual",
        }
    }
}

impl fmt::Display for RefreshTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one refresh attempt against one data source.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub kind: SourceKind,
    pub trigger: RefreshTrigger,
    /// `None` when the refresh succeeded
    pub error: Option<DiscoverError>,
}

impl RefreshOutcome {
    pub fn new(kind: SourceKind, trigger: RefreshTrigger, result: Result<(), DiscoverError>) -> Self {
        Self {
            kind,
            trigger,
            error: result.err(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;

    #[test]
    fn test_outcome_from_result() {
        let ok = RefreshOutcome::new(SourceKind::Popular, RefreshTrigger::Manual, Ok(()));
        assert!(ok.is_success());

        let failed = RefreshOutcome::new(
            SourceKind::Trending,
            RefreshTrigger::Connectivity,
            Err(DiscoverError::refresh(
                SourceKind::Trending,
                SourceError::network("offline"),
            )),
        );
        assert!(!failed.is_success());
        assert_eq!(failed.trigger.to_string(), "connectivity");
    }
}
