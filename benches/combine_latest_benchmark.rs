//! Benchmarks for state aggregation
//!
//! Measures combine-latest throughput and view state construction for
//! listings of different sizes.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use discover::aggregator::combine_latest;
use discover::error::SourceError;
use discover::models::{ImageStrategy, Show, ShowList};
use discover::view_state::DiscoverViewState;
use futures::executor::block_on;
use futures::stream::{self, StreamExt};

/// Generate a listing of `len` shows with poster paths
fn generate_listing(len: usize, prefix: &str) -> ShowList {
    (0..len as i64)
        .map(|i| Show::new(i, format!("{} {}", prefix, i)).with_poster_path(format!("/{}.jpg", i)))
        .collect()
}

fn strategy() -> ImageStrategy {
    ImageStrategy::new("https://images.example.org/t/p")
        .with_poster_sizes(["w92", "w154", "w342", "original"])
}

/// Benchmark combining `updates` values per feed into view states
fn bench_combine_latest(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine_latest");

    for updates in [10usize, 100, 1000].iter() {
        let trending = generate_listing(20, "Trending");
        let popular = generate_listing(20, "Popular");
        group.throughput(Throughput::Elements((*updates * 3) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_updates", updates)),
            updates,
            |b, &updates| {
                b.iter(|| {
                    let first = stream::iter(
                        (0..updates).map(|_| Ok::<_, SourceError>(trending.clone())),
                    )
                    .boxed();
                    let second = stream::iter(
                        (0..updates).map(|_| Ok::<_, SourceError>(popular.clone())),
                    )
                    .boxed();
                    let third = stream::iter((0..updates).map(|_| Ok::<_, SourceError>(strategy())))
                        .boxed();

                    let states = block_on(
                        combine_latest(first, second, third)
                            .filter_map(|item| async move { item.ok() })
                            .map(DiscoverViewState::from)
                            .collect::<Vec<_>>(),
                    );
                    black_box(states)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark resolving poster urls for a rendered state
fn bench_poster_urls(c: &mut Criterion) {
    let mut group = c.benchmark_group("poster_urls");

    for size in [10usize, 50, 200].iter() {
        let state = DiscoverViewState::new(
            generate_listing(*size, "Trending"),
            generate_listing(*size, "Popular"),
            strategy(),
        );
        group.throughput(Throughput::Elements(state.total_items() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| {
                let urls: Vec<String> = state
                    .trending()
                    .iter()
                    .chain(state.popular())
                    .filter_map(|show| show.poster_path.as_deref())
                    .map(|path| state.image_strategy().poster_url(path, black_box(154)))
                    .collect();
                black_box(urls)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_combine_latest, bench_poster_urls);
criterion_main!(benches);
