//! Board dimensions, the validity predicate, and row-major iteration.

use crate::coord::Coord;
use crate::error::BoardError;
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// Width of the standard board.
pub const BOARD_WIDTH: u32 = 30;

/// Height of the standard board.
pub const BOARD_HEIGHT: u32 = 30;

/// Dimensions of a rectangular board.
///
/// A coordinate is on the board when `0 <= x < width` and
/// `0 <= y < height`. Cells are laid out row-major: the flat index of
/// `(x, y)` is `x + width * y`.
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u32,
    height: u32,
}

impl Board {
    /// The standard 30×30 board.
    pub const STANDARD: Board = Board {
        width: BOARD_WIDTH,
        height: BOARD_HEIGHT,
    };

    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a board of `width * height` cells.
    ///
    /// Returns `Err(BoardError::EmptyBoard)` if either dimension is 0, or
    /// `Err(BoardError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit_core::{Board, Coord};
    ///
    /// let board = Board::new(4, 3).unwrap();
    /// assert_eq!(board.cell_count(), 12);
    /// assert!(board.contains(Coord::new(3, 2)));
    /// assert!(!board.contains(Coord::new(4, 0)));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if width > Self::MAX_DIM {
            return Err(BoardError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(BoardError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `coord` lies on the board.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && (coord.x as u32) < self.width
            && coord.y >= 0
            && (coord.y as u32) < self.height
    }

    /// Row-major flat index of `coord`, or `None` if it is off the board.
    #[inline]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.x as usize + self.width as usize * coord.y as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn coord_at(&self, index: usize) -> Option<Coord> {
        if index >= self.cell_count() {
            return None;
        }
        let w = self.width as usize;
        Some(Coord::new((index % w) as i32, (index / w) as i32))
    }

    /// The on-board unit neighbours of `coord`, in
    /// [`Dir::ALL`](crate::Dir::ALL) order.
    ///
    /// Corner cells have 2 neighbours, edge cells 3, interior cells 4.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        coord
            .neighbours()
            .into_iter()
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Every cell exactly once, in row-major order starting at `(0, 0)`.
    pub fn coords(&self) -> BoardCoords {
        BoardCoords {
            cursor: Coord::new(0, 0),
            width: self.width as i32,
            height: self.height as i32,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl IntoIterator for Board {
    type Item = Coord;
    type IntoIter = BoardCoords;

    fn into_iter(self) -> BoardCoords {
        self.coords()
    }
}

/// Row-major iterator over the cells of a [`Board`].
///
/// Created by [`Board::coords`]. `x` varies fastest; the iterator is
/// exhausted once its cursor reaches the past-the-end position
/// `(0, height)`. Each iterator owns its cursor, so independent
/// iterations never interfere.
#[derive(Clone, Debug)]
pub struct BoardCoords {
    cursor: Coord,
    width: i32,
    height: i32,
}

impl BoardCoords {
    fn remaining(&self) -> usize {
        if self.cursor.y >= self.height {
            return 0;
        }
        let rows_left = (self.height - self.cursor.y) as usize;
        rows_left * self.width as usize - self.cursor.x as usize
    }
}

impl Iterator for BoardCoords {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.cursor.y >= self.height {
            return None;
        }
        let current = self.cursor;
        self.cursor.x += 1;
        if self.cursor.x == self.width {
            self.cursor.x = 0;
            self.cursor.y += 1;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BoardCoords {}

impl FusedIterator for BoardCoords {}
