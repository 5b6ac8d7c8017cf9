//! Criterion micro-benchmarks for grid and ring buffer operations.

use criterion::{criterion_group, criterion_main, Criterion};
use gridkit_core::{Board, Coord, Dir};
use gridkit_ring::RingBuffer;
use gridkit_space::Grid;
use std::hint::black_box;

/// Benchmark: read every cell of a 30x30 grid through coordinate indexing.
fn bench_grid_index_scan(c: &mut Criterion) {
    let grid = Grid::from_fn(Board::STANDARD, |p| p.x + p.y);

    c.bench_function("grid_index_scan_900", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for p in Board::STANDARD.coords() {
                sum += grid[p] as i64;
            }
            black_box(sum)
        });
    });
}

/// Benchmark: deep copy of a 30x30 distance grid.
fn bench_grid_clone(c: &mut Criterion) {
    let grid = Grid::new(Some(0u32));

    c.bench_function("grid_clone_900", |b| {
        b.iter(|| black_box(grid.clone()));
    });
}

/// Benchmark: 900 push_back/pop_front cycles with wraparound.
fn bench_ring_fifo_cycle(c: &mut Criterion) {
    let mut ring = RingBuffer::new(64);

    c.bench_function("ring_fifo_cycle_900", |b| {
        b.iter(|| {
            for p in Board::STANDARD.coords() {
                ring.push_back(p);
                if ring.len() > 32 {
                    black_box(ring.pop_front());
                }
            }
            ring.clear();
        });
    });
}

/// Benchmark: neighbour expansion and direction recovery for every cell.
fn bench_neighbour_directions(c: &mut Criterion) {
    let board = Board::STANDARD;

    c.bench_function("neighbour_directions_900", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for p in board.coords() {
                for n in board.neighbours(p) {
                    if let Ok(d) = n.direction_from(p) {
                        count += (d == Dir::Up) as usize;
                    }
                }
            }
            black_box(count)
        });
    });

    let origin = Coord::new(0, 0);
    c.bench_function("direction_from_non_adjacent", |b| {
        b.iter(|| black_box(black_box(origin).direction_from(Coord::new(2, 2))));
    });
}

criterion_group!(
    benches,
    bench_grid_index_scan,
    bench_grid_clone,
    bench_ring_fifo_cycle,
    bench_neighbour_directions
);
criterion_main!(benches);
