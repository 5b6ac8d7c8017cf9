//! Test utilities for gridkit development.
//!
//! Provides ASCII maze fixtures, seeded obstacle maps, and a reference
//! breadth-first search built on [`Grid`](gridkit_space::Grid) and
//! [`RingBuffer`](gridkit_ring::RingBuffer), used by integration tests
//! and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod traversal;

pub use fixtures::{parse_maze, scattered_walls, Maze, MazeError};
pub use traversal::{bfs_distances, shortest_path};
