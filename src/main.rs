//! Demo driver for the Discover screen core.
//!
//! Wires the in-memory adapters to a controller, brings the network up,
//! prints every state the screen would render, then tears down.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use color_eyre::eyre::eyre;
use color_eyre::Result;

use discover::adapters::{InMemoryShowSource, NetworkState, ShowFetcher, StaticImageProvider};
use discover::config::DiscoverConfig;
use discover::controller::{DiscoverDeps, ScreenController};
use discover::error::SourceError;
use discover::logging;
use discover::models::{ImageStrategy, Page, Show, ShowList, SourceKind};
use discover::view_state::DiscoverViewState;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const STATE_WAIT: Duration = Duration::from_secs(5);

/// Serves a fixed catalogue, as a remote listing endpoint would.
struct CatalogueFetcher;

#[async_trait]
impl ShowFetcher for CatalogueFetcher {
    async fn fetch(&self, kind: SourceKind, page: Page) -> Result<ShowList, SourceError> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let titles: &[&str] = match kind {
            SourceKind::Trending => &["Shogun", "The Bear", "Slow Horses"],
            SourceKind::Popular => &["Breaking Bad", "The Wire", "Succession"],
        };
        let offset = i64::from(page.number()) * 100;
        Ok(titles
            .iter()
            .zip(1i64..)
            .map(|(title, n)| {
                Show::new(offset + n, *title).with_poster_path(format!("/{}-{}.jpg", kind, n))
            })
            .collect())
    }
}

fn print_state(state: &DiscoverViewState) {
    let images = state.image_strategy();
    for kind in [SourceKind::Trending, SourceKind::Popular] {
        println!("{}:", kind);
        for show in state.section(kind) {
            let poster = show
                .poster_path
                .as_deref()
                .map(|path| images.poster_url(path, 154))
                .unwrap_or_default();
            println!("  {:>4}  {:<16} {}", show.id, show.title, poster);
        }
    }
}

async fn run(config: DiscoverConfig) -> Result<()> {
    let fetcher: Arc<dyn ShowFetcher> = Arc::new(CatalogueFetcher);
    let trending = Arc::new(InMemoryShowSource::new(SourceKind::Trending, fetcher.clone()));
    let popular = Arc::new(InMemoryShowSource::new(SourceKind::Popular, fetcher));

    // Cached listings from a previous session
    trending.store(config.page, vec![Show::new(1, "Shogun")]);
    popular.store(config.page, Vec::new());

    let images = Arc::new(StaticImageProvider::new(
        ImageStrategy::new("https://images.example.org/t/p")
            .with_poster_sizes(["w92", "w154", "w342", "original"]),
    ));
    let network = Arc::new(NetworkState::new(false));

    let deps = DiscoverDeps::new(trending, popular, images, network.clone());
    let controller = ScreenController::new(deps, config);
    let mut states = controller.subscribe();

    tokio::time::timeout(STATE_WAIT, states.changed())
        .await
        .map_err(|_| eyre!("no cached state within {:?}", STATE_WAIT))??;
    println!("-- cached --");
    if let Some(state) = controller.current_state() {
        print_state(&state);
    }

    let mut outcomes = controller.subscribe_refresh_outcomes();
    network.set_connected(true);
    for _ in 0..2 {
        let outcome = tokio::time::timeout(STATE_WAIT, outcomes.recv())
            .await
            .map_err(|_| eyre!("refresh did not finish within {:?}", STATE_WAIT))??;
        if let Some(err) = outcome.error {
            println!("refresh of {} failed: {}", outcome.kind, err.user_message());
        }
    }

    // Let the presenter drain the refreshed listings
    tokio::time::sleep(Duration::from_millis(20)).await;
    println!("-- refreshed --");
    if let Some(state) = controller.current_state() {
        print_state(&state);
    }

    controller.teardown();
    Ok(())
}

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("discover {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let config = DiscoverConfig::from_env()?;
    logging::init(&config.log_filter);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}
