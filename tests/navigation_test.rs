mod common;

use common::{show, Harness};
use discover::adapters::mock::NavigationCall;
use discover::config::DiscoverConfig;
use discover::models::TransitionHint;

#[tokio::test]
async fn test_header_activation_forwards_hint() {
    let h = Harness::start(DiscoverConfig::default());
    let hint = TransitionHint::new().with_element("trending_header");

    h.controller
        .on_trending_header_activated(&h.navigator, Some(hint.clone()));
    h.controller.on_popular_header_activated(&h.navigator, None);

    assert_eq!(
        h.navigator.calls(),
        vec![
            NavigationCall::Trending(Some(hint)),
            NavigationCall::Popular(None),
        ]
    );
}

#[tokio::test]
async fn test_item_activation_forwards_show() {
    let h = Harness::start(DiscoverConfig::default());
    let severance = show(95396, "Severance").with_year(2022);
    let hint = TransitionHint::new()
        .with_element("poster")
        .with_element("title");

    h.controller
        .on_item_activated(&h.navigator, &severance, Some(hint.clone()));

    assert_eq!(
        h.navigator.calls(),
        vec![NavigationCall::Details(severance, Some(hint))]
    );
}

#[tokio::test]
async fn test_navigation_leaves_state_and_refresh_untouched() {
    let h = Harness::start(DiscoverConfig::default());

    h.controller
        .on_item_activated(&h.navigator, &show(1, "Dark"), None);
    h.controller.on_popular_header_activated(&h.navigator, None);

    assert!(h.controller.current_state().is_none());
    assert_eq!(h.trending.refresh_calls(), 0);
    assert_eq!(h.popular.refresh_calls(), 0);
    assert_eq!(h.navigator.calls().len(), 2);
}
