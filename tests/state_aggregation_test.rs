//! Integration tests for state composition through the screen controller.

mod common;

use std::time::Duration;

use common::{shows, strategy, Harness};
use discover::config::DiscoverConfig;
use discover::error::{DiscoverError, SourceError};
use discover::models::StreamSlot;
use discover::view_state::DiscoverViewState;

const QUIET: Duration = Duration::from_millis(50);

#[tokio::test]
async fn test_no_state_before_all_feeds_emit() {
    let h = Harness::start(DiscoverConfig::default());
    assert!(h.controller.current_state().is_none());

    h.trending.emit(shows(&["A"]));
    h.popular.emit(shows(&["X"]));
    h.trending.emit(shows(&["A", "B"]));
    tokio::time::sleep(QUIET).await;

    assert!(h.controller.current_state().is_none());
    assert!(h.observer.states().is_empty());

    h.images.emit(strategy("s1"));
    let state = h.state_number(1).await;
    assert_eq!(
        state,
        DiscoverViewState::new(shows(&["A", "B"]), shows(&["X"]), strategy("s1"))
    );
}

#[tokio::test]
async fn test_update_to_one_feed_keeps_the_others() {
    let h = Harness::start(DiscoverConfig::default());
    h.seed_all();

    let first = h.state_number(1).await;
    assert_eq!(
        first,
        DiscoverViewState::new(shows(&["A"]), shows(&["X"]), strategy("s1"))
    );

    h.trending.emit(shows(&["A", "B"]));
    let second = h.state_number(2).await;
    assert_eq!(
        second,
        DiscoverViewState::new(shows(&["A", "B"]), shows(&["X"]), strategy("s1"))
    );
    assert_eq!(h.controller.current_state(), Some(second));
}

#[tokio::test]
async fn test_every_state_reflects_latest_of_each_feed() {
    let h = Harness::start(DiscoverConfig::default());
    h.seed_all();
    h.state_number(1).await;

    h.popular.emit(shows(&["X", "Y"]));
    h.state_number(2).await;
    h.images.emit(strategy("s2"));
    h.state_number(3).await;
    h.trending.emit(Vec::new());
    h.state_number(4).await;
    h.popular.emit(shows(&["Z"]));

    let last = h.state_number(5).await;
    assert_eq!(
        last,
        DiscoverViewState::new(Vec::new(), shows(&["Z"]), strategy("s2"))
    );

    let states = h.observer.states();
    assert_eq!(states[1].popular(), shows(&["X", "Y"]).as_slice());
    assert_eq!(states[1].trending(), shows(&["A"]).as_slice());
    assert_eq!(states[2].image_strategy(), &strategy("s2"));
    assert_eq!(states[2].popular(), shows(&["X", "Y"]).as_slice());
    assert!(states[3].trending().is_empty());
    assert_eq!(states[3].image_strategy(), &strategy("s2"));
}

#[tokio::test]
async fn test_cached_values_produce_state_immediately() {
    let h = Harness::start_with(DiscoverConfig::default(), |mocks| {
        mocks.trending.emit(shows(&["cached trending"]));
        mocks.popular.emit(shows(&["cached popular"]));
        mocks.images.emit(strategy("cached"));
    });

    let mut states = h.controller.subscribe();
    tokio::time::timeout(common::WAIT, states.changed())
        .await
        .expect("state within timeout")
        .unwrap();

    let state = h.controller.current_state().unwrap();
    assert_eq!(state.trending()[0].title, "cached trending");
    assert_eq!(state.popular()[0].title, "cached popular");
}

#[tokio::test]
async fn test_aggregator_subscribes_with_configured_page() {
    let page = discover::models::Page::new(2);
    let h = Harness::start(DiscoverConfig::default().with_page(page));

    assert_eq!(h.trending.subscribed_pages(), vec![page]);
    assert_eq!(h.popular.subscribed_pages(), vec![page]);
}

// Upstream stream failures are terminal for the whole state stream, unlike
// refresh failures. This pins that asymmetric behaviour.
#[tokio::test]
async fn test_upstream_error_terminates_state_stream() {
    let h = Harness::start(DiscoverConfig::default());
    h.seed_all();
    let first = h.state_number(1).await;

    h.popular.fail(SourceError::storage("table dropped"));
    assert!(h.observer.wait_for_errors(1).await);
    match &h.observer.errors()[0] {
        DiscoverError::Upstream { slot, source } => {
            assert_eq!(*slot, StreamSlot::Popular);
            assert_eq!(*source, SourceError::storage("table dropped"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }

    h.trending.emit(shows(&["after failure"]));
    tokio::time::sleep(QUIET).await;

    assert_eq!(h.observer.states().len(), 1);
    assert_eq!(h.controller.current_state(), Some(first));
    assert!(h.trending.wait_for_subscribers(0).await);
    assert!(h.images.wait_for_subscribers(0).await);
}

#[tokio::test]
async fn test_upstream_error_does_not_stop_refreshes() {
    let h = Harness::start(DiscoverConfig::default());
    h.seed_all();
    h.state_number(1).await;

    h.images.fail(SourceError::network("configuration endpoint down"));
    assert!(h.observer.wait_for_errors(1).await);

    let mut rx = h.controller.subscribe_refresh_outcomes();
    h.connectivity.connect();
    let outcomes = common::outcomes(&mut rx, 2).await;

    assert!(outcomes.iter().all(|o| o.is_success()));
    assert_eq!(h.trending.refresh_calls(), 1);
    assert_eq!(h.popular.refresh_calls(), 1);
}
