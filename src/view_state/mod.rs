//! View-only data handed to the presentation layer.
//!
//! ```text
//! trending ─┐
//! popular  ─┼─▶ StateAggregator ─▶ DiscoverViewState ─▶ presenter ─▶ UI
//! images   ─┘
//! ```

mod discover_view;

pub use discover_view::DiscoverViewState;
