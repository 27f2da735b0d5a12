//! Show entities and the identifiers that accompany them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A show as listed on the Discover screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Show {
    /// Local database id
    pub id: i64,
    /// Display title
    pub title: String,
    /// First-aired year, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Relative poster path, resolved through an [`crate::models::ImageStrategy`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trakt_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<i64>,
}

impl Show {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: None,
            poster_path: None,
            trakt_id: None,
            tmdb_id: None,
        }
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_poster_path(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    pub fn with_trakt_id(mut self, id: i64) -> Self {
        self.trakt_id = Some(id);
        self
    }

    pub fn with_tmdb_id(mut self, id: i64) -> Self {
        self.tmdb_id = Some(id);
        self
    }
}

/// Ordered list of shows produced by a data source.
pub type ShowList = Vec<Show>;

/// Which listing a data source backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Trending,
    Popular,
}

impl SourceKind {
    /// Short lowercase label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Trending => "trending",
            SourceKind::Popular => "popular",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Page parameter passed to data sources.
///
/// The Discover screen only ever shows the first page; other pages belong to
/// the dedicated trending/popular screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(0);

    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual continuity cue handed to the navigator.
///
/// Opaque to the controller: it is threaded through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TransitionHint {
    shared_elements: Vec<String>,
}

impl TransitionHint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named shared element participating in the transition.
    pub fn with_element(mut self, name: impl Into<String>) -> Self {
        self.shared_elements.push(name.into());
        self
    }

    pub fn elements(&self) -> &[String] {
        &self.shared_elements
    }

    pub fn is_empty(&self) -> bool {
        self.shared_elements.is_empty()
    }
}
