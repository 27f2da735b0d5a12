//! Errors reported by external collaborators (data sources, the image
//! provider and the connectivity watcher).

use thiserror::Error;

use super::category::ErrorCategory;

/// Failure reported by a collaborator stream or refresh call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("network request failed: {0}")]
    Network(String),

    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("stream closed: {0}")]
    Closed(String),

    #[error("{0}")]
    Other(String),
}

impl SourceError {
    pub fn network(message: impl Into<String>) -> Self {
        SourceError::Network(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        SourceError::Storage(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        SourceError::Other(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SourceError::Network(_) => ErrorCategory::Network,
            SourceError::Server { status, .. } if *status >= 500 => ErrorCategory::Server,
            SourceError::Server { .. } => ErrorCategory::Client,
            SourceError::Storage(_) => ErrorCategory::Storage,
            SourceError::Closed(_) | SourceError::Other(_) => ErrorCategory::Client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        assert_eq!(
            SourceError::network("dns").to_string(),
            "network request failed: dns"
        );
        assert_eq!(
            SourceError::Server {
                status: 503,
                message: "unavailable".to_string()
            }
            .to_string(),
            "server returned 503: unavailable"
        );
        assert_eq!(SourceError::other("boom").to_string(), "boom");
    }

    #[test]
    fn test_server_status_categories() {
        let server = SourceError::Server {
            status: 502,
            message: String::new(),
        };
        let client = SourceError::Server {
            status: 404,
            message: String::new(),
        };
        assert_eq!(server.category(), ErrorCategory::Server);
        assert_eq!(client.category(), ErrorCategory::Client);
        assert_eq!(SourceError::storage("disk").category(), ErrorCategory::Storage);
    }
}
