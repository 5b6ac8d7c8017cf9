//! Criterion benchmarks for full-board traversals.

use criterion::{criterion_group, criterion_main, Criterion};
use gridkit_bench::{obstacle_profile, open_profile};
use gridkit_test_utils::{bfs_distances, shortest_path};
use std::hint::black_box;

/// Benchmark: BFS distance map over an empty 30x30 board from a corner.
fn bench_bfs_open(c: &mut Criterion) {
    let (walls, start) = open_profile();

    c.bench_function("bfs_open_30x30", |b| {
        b.iter(|| black_box(bfs_distances(&walls, start)));
    });
}

/// Benchmark: BFS distance map with ~25% walls.
fn bench_bfs_obstacles(c: &mut Criterion) {
    let (walls, start) = obstacle_profile(42);

    c.bench_function("bfs_obstacles_30x30", |b| {
        b.iter(|| black_box(bfs_distances(&walls, start)));
    });
}

/// Benchmark: corner-to-corner path reconstruction on an open board.
fn bench_shortest_path(c: &mut Criterion) {
    let (walls, start) = open_profile();
    let goal = gridkit_core::Coord::new(29, 29);

    c.bench_function("shortest_path_corner_to_corner", |b| {
        b.iter(|| black_box(shortest_path(&walls, start, goal)));
    });
}

criterion_group!(
    benches,
    bench_bfs_open,
    bench_bfs_obstacles,
    bench_shortest_path
);
criterion_main!(benches);
