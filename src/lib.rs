//! Discover - state composition and refresh orchestration for the Discover
//! screen.
//!
//! The screen shows trending and popular shows rendered with the current
//! image strategy. [`controller::ScreenController`] combines the three
//! feeds into one [`view_state::DiscoverViewState`] and refreshes both show
//! listings whenever connectivity is (re)established.

pub mod adapters;
pub mod aggregator;
pub mod config;
pub mod controller;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod models;
pub mod prelude;
pub mod presentation;
pub mod refresh;
pub mod traits;
pub mod view_state;
