//! Maze fixtures.
//!
//! - [`parse_maze`]: builds a wall map from an ASCII picture.
//! - [`scattered_walls`]: deterministic random obstacles from a seed.

use gridkit_core::{Board, BoardError, Coord};
use gridkit_space::Grid;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// A wall map plus optional start and goal markers.
#[derive(Clone, Debug)]
pub struct Maze {
    /// `true` where the cell is blocked.
    pub walls: Grid<bool>,
    pub start: Option<Coord>,
    pub goal: Option<Coord>,
}

impl Maze {
    pub fn board(&self) -> Board {
        self.walls.board()
    }

    /// Whether `coord` is on the board and not a wall.
    pub fn is_open(&self, coord: Coord) -> bool {
        matches!(self.walls.get(coord), Some(false))
    }
}

/// Errors from [`parse_maze`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// Rows have different lengths.
    Ragged { row: usize, expected: usize, actual: usize },
    /// A character other than `#`, `.`, `S`, `G`.
    UnknownCell { coord: Coord, ch: char },
    /// More than one `S` or `G`.
    DuplicateMarker { ch: char },
    /// The picture has no cells.
    Board(BoardError),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} cells, expected {expected}"),
            Self::UnknownCell { coord, ch } => write!(f, "unknown cell {ch:?} at {coord}"),
            Self::DuplicateMarker { ch } => write!(f, "marker {ch:?} appears more than once"),
            Self::Board(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MazeError {}

/// Parse an ASCII maze: `#` wall, `.` open, `S` start, `G` goal.
///
/// Leading/trailing whitespace on each line and blank lines are ignored,
/// so fixtures can be written as indented raw strings.
pub fn parse_maze(text: &str) -> Result<Maze, MazeError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let width = rows.first().map_or(0, |r| r.chars().count());
    for (row, line) in rows.iter().enumerate() {
        let actual = line.chars().count();
        if actual != width {
            return Err(MazeError::Ragged {
                row,
                expected: width,
                actual,
            });
        }
    }
    let board = Board::new(width as u32, rows.len() as u32).map_err(MazeError::Board)?;

    let mut walls = Grid::with_board(false, board);
    let mut start = None;
    let mut goal = None;
    for (y, line) in rows.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let coord = Coord::new(x as i32, y as i32);
            match ch {
                '#' => walls[coord] = true,
                '.' => {}
                'S' => place_marker(&mut start, coord, ch)?,
                'G' => place_marker(&mut goal, coord, ch)?,
                _ => return Err(MazeError::UnknownCell { coord, ch }),
            }
        }
    }
    Ok(Maze { walls, start, goal })
}

fn place_marker(slot: &mut Option<Coord>, coord: Coord, ch: char) -> Result<(), MazeError> {
    if slot.replace(coord).is_some() {
        return Err(MazeError::DuplicateMarker { ch });
    }
    Ok(())
}

/// Block roughly `per_mille / 1000` of the cells, chosen by a ChaCha8
/// stream seeded with `seed`. Same seed, same map.
pub fn scattered_walls(board: Board, per_mille: u32, seed: u64) -> Grid<bool> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(board, |_| rng.next_u32() % 1000 < per_mille)
}
