//! gridkit: spatial and queueing primitives for grid-based simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridkit sub-crates.
//!
//! # Quick start
//!
//! A breadth-first distance map over the standard 30×30 board:
//!
//! ```rust
//! use gridkit::prelude::*;
//!
//! let board = Board::STANDARD;
//! let start = Coord::new(0, 0);
//! let mut dist: Grid<Option<u32>> = Grid::with_board(None, board);
//! let mut frontier = RingBuffer::new(board.cell_count());
//!
//! dist[start] = Some(0);
//! frontier.push_back(start);
//! while let Some(cur) = frontier.pop_front() {
//!     let d = dist[cur].unwrap();
//!     for next in board.neighbours(cur) {
//!         if dist[next].is_none() {
//!             dist[next] = Some(d + 1);
//!             frontier.push_back(next);
//!         }
//!     }
//! }
//! assert_eq!(dist[Coord::new(29, 29)], Some(58));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridkit-core` | `Coord`, `Dir`, `Board`, errors |
//! | [`space`] | `gridkit-space` | `Grid` |
//! | [`ring`] | `gridkit-ring` | `RingBuffer` |
//! | [`stats`] | `gridkit-stats` | mean, variance, quantiles |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions, and boards (`gridkit-core`).
pub use gridkit_core as types;

/// Dense grid storage (`gridkit-space`).
pub use gridkit_space as space;

/// Fixed-capacity ring buffer (`gridkit-ring`).
pub use gridkit_ring as ring;

/// Descriptive statistics (`gridkit-stats`).
pub use gridkit_stats as stats;

/// The types most traversal code needs.
pub mod prelude {
    pub use gridkit_core::{Board, BoardError, Coord, CoordError, Dir};
    pub use gridkit_ring::{CapacityError, RingBuffer};
    pub use gridkit_space::{Grid, GridError};
}
