//! Domain model types shared by the aggregator, the refresh coordinator and
//! the collaborator traits.

mod connectivity;
mod image;
mod show;

pub use connectivity::ConnectivityEvent;
pub use image::ImageStrategy;
pub use show::{Page, Show, ShowList, SourceKind, TransitionHint};

use std::fmt;

/// One of the three upstream feeds combined into the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamSlot {
    Trending,
    Popular,
    ImageStrategy,
}

impl StreamSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamSlot::Trending => "trending",
            StreamSlot::Popular => "popular",
            StreamSlot::ImageStrategy => "image strategy",
        }
    }
}

impl From<SourceKind> for StreamSlot {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Trending => StreamSlot::Trending,
            SourceKind::Popular => StreamSlot::Popular,
        }
    }
}

impl fmt::Display for StreamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
