//! Discover screen configuration.
//!
//! Use the builder methods to customize behaviour, or load from JSON or the
//! process environment.
//!
//! ```ignore
//! use discover::config::DiscoverConfig;
//!
//! let config = DiscoverConfig::default()
//!     .with_refresh_on_start(true)
//!     .with_refresh_timeout(Some(Duration::from_secs(20)));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DiscoverError, DiscoverResult};
use crate::models::Page;

pub const ENV_PAGE: &str = "DISCOVER_PAGE";
pub const ENV_REFRESH_ON_START: &str = "DISCOVER_REFRESH_ON_START";
pub const ENV_REFRESH_TIMEOUT_SECS: &str = "DISCOVER_REFRESH_TIMEOUT_SECS";
pub const ENV_LOG_FILTER: &str = "DISCOVER_LOG_FILTER";

const DEFAULT_LOG_FILTER: &str = "discover=info";
const DEFAULT_OUTCOME_BUFFER: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverConfig {
    /// Page requested from both data sources (default: first page)
    pub page: Page,
    /// Launch one refresh round at construction without waiting for
    /// connectivity (default: false)
    pub refresh_on_start: bool,
    /// Upper bound for a single refresh call, in seconds (default: none)
    pub refresh_timeout_secs: Option<u64>,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Capacity of the refresh outcome broadcast channel
    pub outcome_buffer: usize,
}

impl Default for DiscoverConfig {
    fn default() -> Self {
        Self {
            page: Page::FIRST,
            refresh_on_start: false,
            refresh_timeout_secs: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            outcome_buffer: DEFAULT_OUTCOME_BUFFER,
        }
    }
}

impl DiscoverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub fn with_refresh_on_start(mut self, enabled: bool) -> Self {
        self.refresh_on_start = enabled;
        self
    }

    /// Stored in whole seconds, rounded up, so the effective timeout is
    /// never shorter than requested.
    pub fn with_refresh_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.refresh_timeout_secs = timeout.map(|t| {
            let secs = t.as_secs() + u64::from(t.subsec_nanos() > 0);
            secs.max(1)
        });
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_outcome_buffer(mut self, capacity: usize) -> Self {
        self.outcome_buffer = capacity;
        self
    }

    pub fn refresh_timeout(&self) -> Option<Duration> {
        self.refresh_timeout_secs.map(Duration::from_secs)
    }

    pub fn from_json(json: &str) -> DiscoverResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DiscoverError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `DISCOVER_*` environment variables.
    pub fn from_env() -> DiscoverResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the
    /// `DISCOVER_*` keys.
    pub fn from_lookup<F>(lookup: F) -> DiscoverResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PAGE) {
            config.page = Page::new(parse_value(ENV_PAGE, &raw)?);
        }
        if let Some(raw) = lookup(ENV_REFRESH_ON_START) {
            config.refresh_on_start = parse_flag(ENV_REFRESH_ON_START, &raw)?;
        }
        if let Some(raw) = lookup(ENV_REFRESH_TIMEOUT_SECS) {
            config.refresh_timeout_secs = Some(parse_value(ENV_REFRESH_TIMEOUT_SECS, &raw)?);
        }
        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            config.log_filter = filter;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DiscoverResult<()> {
        if self.outcome_buffer == 0 {
            return Err(DiscoverError::Config(
                "outcome_buffer must be at least 1".to_string(),
            ));
        }
        if self.refresh_timeout_secs == Some(0) {
            return Err(DiscoverError::Config(
                "refresh_timeout_secs must be positive".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(DiscoverError::Config("log_filter must not be empty".to_string()));
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> DiscoverResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| DiscoverError::Config(format!("{} has invalid value '{}'", key, raw)))
}

fn parse_flag(key: &str, raw: &str) -> DiscoverResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(DiscoverError::Config(format!(
            "{} has invalid value '{}'",
            key, raw
        ))),
    }
}
