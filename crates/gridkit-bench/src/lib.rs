//! Benchmark profiles for gridkit.
//!
//! - [`open_profile`]: standard 30x30 board with no walls
//! - [`obstacle_profile`]: standard board with ~25% seeded walls and an open start cell

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridkit_core::{Board, Coord};
use gridkit_space::Grid;
use gridkit_test_utils::scattered_walls;

/// Wall density used by [`obstacle_profile`], in cells per thousand.
pub const OBSTACLE_DENSITY_PER_MILLE: u32 = 250;

/// Open 30x30 board, start in the corner (longest BFS).
pub fn open_profile() -> (Grid<bool>, Coord) {
    (Grid::new(false), Coord::new(0, 0))
}

/// 30x30 board with seeded walls. The centre cell is always cleared so
/// the traversal has somewhere to start.
pub fn obstacle_profile(seed: u64) -> (Grid<bool>, Coord) {
    let mut walls = scattered_walls(Board::STANDARD, OBSTACLE_DENSITY_PER_MILLE, seed);
    let start = Coord::new(15, 15);
    walls[start] = false;
    (walls, start)
}
