//! Criterion benchmarks for distance-field construction and the full search.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use corridor_core::{CellState, Grid};
use corridor_paths::{DistanceField, Search, SearchConfig};
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

/// A square grid with roughly `density` of its cells blocked.
fn random_grid(side: usize, density: f64, seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    Grid::from_fn(side, side, |_| CellState::from(rng.random_bool(density)))
        .expect("benchmark grid dimensions are non-zero")
}

fn bench_distance_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_field");
    for side in [20usize, 100, 500] {
        let grid = random_grid(side, 0.25, 7);
        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, g| {
            b.iter(|| DistanceField::build(black_box(g), g.entrance()))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let grid = random_grid(500, 0.25, 11);
    for concurrent in [false, true] {
        let cfg = SearchConfig {
            concurrent,
            ..SearchConfig::default()
        };
        let name = if concurrent { "concurrent" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter(|| Search::run(black_box(&grid), &cfg).outcome())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distance_field, bench_search);
criterion_main!(benches);
