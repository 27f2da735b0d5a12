//! State aggregation for the Discover screen.
//!
//! [`combine_latest`] is the merge operator; [`StateAggregator`] wires it to
//! the data sources and image provider and pumps the result into the
//! presentation context.

mod combine_latest;
mod state_aggregator;

pub use combine_latest::{combine_latest, CombineLatest};
pub use state_aggregator::StateAggregator;
