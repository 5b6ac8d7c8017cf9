//! Owned, row-major 2D storage addressed by [`Coord`].

use crate::error::GridError;
use gridkit_core::{Board, Coord};
use std::ops::{Index, IndexMut};

/// One value of type `T` per cell of a [`Board`].
///
/// Cells are stored contiguously in row-major order: `(x, y)` lives at
/// flat index `x + width * y`. Cloning deep-copies the storage.
///
/// Indexing with `grid[coord]` panics if `coord` is off the board rather
/// than aliasing a cell in a neighbouring row. Use [`get`](Self::get) when
/// the coordinate has not already been validated.
///
/// # Examples
///
/// ```
/// use gridkit_core::Coord;
/// use gridkit_space::Grid;
///
/// let mut dist = Grid::new(0u32);
/// dist[Coord::new(5, 5)] = 7;
/// assert_eq!(dist[Coord::new(5, 5)], 7);
/// assert_eq!(dist[Coord::new(5, 6)], 0);
/// assert_eq!(dist.len(), 900);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    board: Board,
}

impl<T: Clone> Grid<T> {
    /// A grid over [`Board::STANDARD`] with every cell set to `init`.
    pub fn new(init: T) -> Self {
        Self::with_board(init, Board::STANDARD)
    }

    /// A grid over `board` with every cell set to `init`.
    pub fn with_board(init: T, board: Board) -> Self {
        log::trace!(
            "allocating {}x{} grid ({} cells)",
            board.width(),
            board.height(),
            board.cell_count()
        );
        Self {
            cells: vec![init; board.cell_count()],
            board,
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f` at every coordinate in row-major order.
    pub fn from_fn(board: Board, f: impl FnMut(Coord) -> T) -> Self {
        let cells: Vec<T> = board.coords().map(f).collect();
        Self { cells, board }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Returns [`GridError::LengthMismatch`] unless `cells` holds exactly
    /// `board.cell_count()` values.
    pub fn from_vec(board: Board, cells: Vec<T>) -> Result<Self, GridError> {
        if cells.len() != board.cell_count() {
            return Err(GridError::LengthMismatch {
                expected: board.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { cells, board })
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: boards have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The board this grid covers.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.board.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.board.height()
    }

    /// The cell at `coord`, or `None` if it is off the board.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.board.index_of(coord).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `coord`, or `None` if it is off the board.
    #[inline]
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        self.board.index_of(coord).map(move |i| &mut self.cells[i])
    }

    /// Cells in storage (row-major) order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable cells in storage (row-major) order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterate cells in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterate cells mutably in storage order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// Iterate `(coord, cell)` pairs in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.board.coords().zip(self.cells.iter())
    }

    /// Consume the grid and return its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    #[inline]
    #[track_caller]
    fn offset(&self, coord: Coord) -> usize {
        match self.board.index_of(coord) {
            Some(i) => i,
            None => panic!(
                "coordinate {coord} outside {}x{} grid",
                self.board.width(),
                self.board.height()
            ),
        }
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, coord: Coord) -> &T {
        &self.cells[self.offset(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        let i = self.offset(coord);
        &mut self.cells[i]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter_mut()
    }
}
