//! Image resolution strategy.
//!
//! The strategy is supplied by an external provider and travels through the
//! view state untouched; the helpers here only turn a relative image path
//! into a URL for a requested width.

use serde::{Deserialize, Serialize};

const ORIGINAL_SIZE: &str = "original";

/// How relative image paths are resolved into URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageStrategy {
    /// Base URL that sizes and paths are appended to
    pub base_url: String,
    /// Poster size buckets, smallest first (e.g. `w92`, `w154`, `original`)
    #[serde(default)]
    pub poster_sizes: Vec<String>,
    /// Backdrop size buckets, smallest first
    #[serde(default)]
    pub backdrop_sizes: Vec<String>,
}

impl ImageStrategy {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            poster_sizes: Vec::new(),
            backdrop_sizes: Vec::new(),
        }
    }

    pub fn with_poster_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.poster_sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_backdrop_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backdrop_sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// URL for a poster at least `min_width` pixels wide.
    pub fn poster_url(&self, path: &str, min_width: u32) -> String {
        self.build_url(pick_size(&self.poster_sizes, min_width), path)
    }

    /// URL for a backdrop at least `min_width` pixels wide.
    pub fn backdrop_url(&self, path: &str, min_width: u32) -> String {
        self.build_url(pick_size(&self.backdrop_sizes, min_width), path)
    }

    fn build_url(&self, size: &str, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            size,
            path.trim_start_matches('/')
        )
    }
}

/// Smallest `wNNN` bucket that is at least `min_width` wide, falling back to
/// `original` (or the largest bucket when `original` is not offered).
fn pick_size(sizes: &[String], min_width: u32) -> &str {
    let fitting = sizes.iter().find(|size| {
        size.strip_prefix('w')
            .and_then(|w| w.parse::<u32>().ok())
            .is_some_and(|w| w >= min_width)
    });

    match fitting {
        Some(size) => size,
        None => sizes
            .iter()
            .find(|size| size.as_str() == ORIGINAL_SIZE)
            .or_else(|| sizes.last())
            .map(String::as_str)
            .unwrap_or(ORIGINAL_SIZE),
    }
}
