//! Board coordinates and the four axis-aligned directions.
//!
//! The coordinate system is screen-space: `x` grows to the right and `y`
//! grows downward, so [`Dir::Up`] decreases `y`.

use crate::error::CoordError;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg};

/// One of the four axis-aligned unit directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    /// Towards smaller `y`.
    Up,
    /// Towards larger `y`.
    Down,
    /// Towards smaller `x`.
    Left,
    /// Towards larger `x`.
    Right,
}

impl Dir {
    /// All four directions, in declaration order.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// The opposite direction. `d.inverse().inverse() == d`.
    pub const fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// Unit offset `(dx, dy)` applied by [`Coord::step`].
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    /// `true` for [`Dir::Up`] and [`Dir::Down`].
    pub const fn is_vertical(self) -> bool {
        matches!(self, Dir::Up | Dir::Down)
    }

    /// The direction leading from `from` to `to`.
    ///
    /// Equivalent to `to.direction_from(from)`.
    pub fn between(from: Coord, to: Coord) -> Result<Dir, CoordError> {
        to.direction_from(from)
    }

    /// Single-character rendering used in diagnostic output.
    pub const fn as_char(self) -> char {
        match self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        }
    }
}

impl Neg for Dir {
    type Output = Dir;

    fn neg(self) -> Dir {
        self.inverse()
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An integer `(x, y)` position.
///
/// A `Coord` is not bounded by itself; use
/// [`Board::contains`](crate::Board::contains) to check it against a board.
///
/// Ordering is row-major (`y` first, then `x`), matching
/// [`Board::coords`](crate::Board::coords).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downward.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from its two axes.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by one unit in `dir`. Same as `self + dir`.
    ///
    /// Total for every input: an axis at `i32::MAX` or `i32::MIN` wraps to
    /// the other end instead of overflowing.
    pub const fn step(self, dir: Dir) -> Coord {
        let (dx, dy) = dir.offset();
        Coord::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// The direction that, applied to `from`, yields `self`.
    ///
    /// Fails with [`CoordError::NotAdjacent`] unless the two coordinates
    /// share one axis and differ by exactly one on the other. Identical
    /// coordinates are not adjacent.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit_core::{Coord, Dir};
    ///
    /// let a = Coord::new(3, 4);
    /// assert_eq!((a + Dir::Left).direction_from(a), Ok(Dir::Left));
    /// assert!(a.direction_from(a).is_err());
    /// ```
    pub fn direction_from(self, from: Coord) -> Result<Dir, CoordError> {
        if !self.is_neighbor(from) {
            return Err(CoordError::NotAdjacent { from, to: self });
        }
        Ok(if self.x == from.x {
            if self.y < from.y {
                Dir::Up
            } else {
                Dir::Down
            }
        } else if self.x < from.x {
            Dir::Left
        } else {
            Dir::Right
        })
    }

    /// `true` iff the coordinates share one axis and differ by exactly one
    /// on the other. Symmetric and irreflexive.
    pub fn is_neighbor(self, other: Coord) -> bool {
        if self.x == other.x {
            self.y.abs_diff(other.y) == 1
        } else if self.y == other.y {
            self.x.abs_diff(other.x) == 1
        } else {
            false
        }
    }

    /// The four unit neighbours in [`Dir::ALL`] order, with no bounds
    /// filtering.
    pub fn neighbours(self) -> [Coord; 4] {
        Dir::ALL.map(|d| self.step(d))
    }

    /// L1 distance. Widened to `u64` so opposite corners of the `i32`
    /// plane do not overflow.
    pub fn manhattan(self, other: Coord) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }
}

impl Add<Dir> for Coord {
    type Output = Coord;

    fn add(self, dir: Dir) -> Coord {
        self.step(dir)
    }
}

impl AddAssign<Dir> for Coord {
    fn add_assign(&mut self, dir: Dir) {
        *self = self.step(dir);
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    // ── Direction tests ─────────────────────────────────────────

    #[test]
    fn inverse_pairs() {
        assert_eq!(Dir::Up.inverse(), Dir::Down);
        assert_eq!(Dir::Down.inverse(), Dir::Up);
        assert_eq!(Dir::Left.inverse(), Dir::Right);
        assert_eq!(Dir::Right.inverse(), Dir::Left);
    }

    #[test]
    fn inverse_is_involution() {
        for d in Dir::ALL {
            assert_eq!(d.inverse().inverse(), d);
            assert_eq!(-(-d), d);
            assert_eq!(d.is_vertical(), d.inverse().is_vertical());
        }
    }

    #[test]
    fn dir_display() {
        let rendered: String = Dir::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(rendered, "udlr");
    }

    // ── Translation tests ───────────────────────────────────────

    #[test]
    fn step_is_screen_space() {
        let a = c(5, 5);
        assert_eq!(a + Dir::Up, c(5, 4));
        assert_eq!(a + Dir::Down, c(5, 6));
        assert_eq!(a + Dir::Left, c(4, 5));
        assert_eq!(a + Dir::Right, c(6, 5));
    }

    #[test]
    fn add_assign_matches_add() {
        let mut a = c(0, 0);
        a += Dir::Right;
        a += Dir::Down;
        assert_eq!(a, c(1, 1));
    }

    #[test]
    fn step_leaves_board_without_clamping() {
        assert_eq!(c(0, 0) + Dir::Up, c(0, -1));
        assert_eq!(c(0, 0) + Dir::Left, c(-1, 0));
    }

    #[test]
    fn step_wraps_at_axis_limits() {
        assert_eq!(c(i32::MAX, 0) + Dir::Right, c(i32::MIN, 0));
        assert_eq!(c(0, i32::MIN) + Dir::Up, c(0, i32::MAX));
        assert_eq!(c(i32::MAX, 0) + Dir::Right + Dir::Left, c(i32::MAX, 0));
    }

    #[test]
    fn coord_from_tuple() {
        assert_eq!(Coord::from((3, -2)), c(3, -2));
        let p: Coord = (0, 29).into();
        assert_eq!(p + Dir::Down, c(0, 30));
    }

    // ── Direction derivation tests ──────────────────────────────

    #[test]
    fn direction_from_each_neighbour() {
        let b = c(2, 2);
        assert_eq!(c(2, 1).direction_from(b), Ok(Dir::Up));
        assert_eq!(c(2, 3).direction_from(b), Ok(Dir::Down));
        assert_eq!(c(1, 2).direction_from(b), Ok(Dir::Left));
        assert_eq!(c(3, 2).direction_from(b), Ok(Dir::Right));
        assert_eq!(Dir::between(b, c(3, 2)), Ok(Dir::Right));
    }

    #[test]
    fn direction_from_identical_fails() {
        let a = c(7, 7);
        assert_eq!(
            a.direction_from(a),
            Err(CoordError::NotAdjacent { from: a, to: a })
        );
    }

    #[test]
    fn direction_from_diagonal_fails() {
        assert!(c(3, 3).direction_from(c(2, 2)).is_err());
    }

    #[test]
    fn direction_from_distance_two_fails() {
        assert!(c(4, 2).direction_from(c(2, 2)).is_err());
        assert!(c(2, 0).direction_from(c(2, 2)).is_err());
    }

    #[test]
    fn direction_from_far_apart_is_error_not_overflow() {
        let far = [
            (c(0, i32::MAX), c(0, -1)),
            (c(0, i32::MIN), c(0, 1)),
            (c(i32::MAX, 5), c(i32::MIN, 5)),
            (c(i32::MIN, 5), c(i32::MAX, 5)),
            (c(i32::MIN, i32::MIN), c(i32::MAX, i32::MAX)),
        ];
        for (to, from) in far {
            assert_eq!(
                to.direction_from(from),
                Err(CoordError::NotAdjacent { from, to })
            );
            assert!(Dir::between(to, from).is_err());
        }
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn is_neighbor_basic() {
        assert!(c(1, 1).is_neighbor(c(1, 2)));
        assert!(c(1, 1).is_neighbor(c(0, 1)));
        assert!(!c(1, 1).is_neighbor(c(2, 2)));
        assert!(!c(1, 1).is_neighbor(c(1, 1)));
        assert!(!c(1, 1).is_neighbor(c(1, 3)));
    }

    #[test]
    fn neighbours_follow_dir_order() {
        assert_eq!(c(1, 1).neighbours(), [c(1, 0), c(1, 2), c(0, 1), c(2, 1)]);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(c(0, 0).manhattan(c(3, 4)), 7);
        assert_eq!(c(-2, 1).manhattan(c(2, -1)), 6);
        let span = u64::from(u32::MAX);
        assert_eq!(c(i32::MIN, i32::MIN).manhattan(c(i32::MAX, i32::MAX)), 2 * span);
    }

    #[test]
    fn coord_display_and_order() {
        assert_eq!(c(3, -1).to_string(), "(3,-1)");
        // row-major: y dominates
        assert!(c(9, 0) < c(0, 1));
        assert!(c(0, 1) < c(1, 1));
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_dir() -> impl Strategy<Value = Dir> {
        prop_oneof![
            Just(Dir::Up),
            Just(Dir::Down),
            Just(Dir::Left),
            Just(Dir::Right),
        ]
    }

    fn arb_coord() -> impl Strategy<Value = Coord> {
        (-1000i32..1000, -1000i32..1000).prop_map(Coord::from)
    }

    fn arb_any_coord() -> impl Strategy<Value = Coord> {
        (any::<i32>(), any::<i32>()).prop_map(Coord::from)
    }

    proptest! {
        #[test]
        fn step_then_direction_recovers_dir(a in arb_coord(), d in arb_dir()) {
            prop_assert_eq!((a + d).direction_from(a), Ok(d));
            prop_assert_eq!(a.direction_from(a + d), Ok(d.inverse()));
        }

        #[test]
        fn step_then_inverse_returns(a in arb_coord(), d in arb_dir()) {
            prop_assert_eq!(a + d + d.inverse(), a);
            prop_assert!((a + d).is_neighbor(a));
        }

        #[test]
        fn is_neighbor_symmetric_and_irreflexive(a in arb_coord(), b in arb_coord()) {
            prop_assert_eq!(a.is_neighbor(b), b.is_neighbor(a));
            prop_assert!(!a.is_neighbor(a));
        }

        #[test]
        fn direction_never_panics_on_full_range(a in arb_any_coord(), b in arb_any_coord()) {
            prop_assert_eq!(b.direction_from(a).is_ok(), a.is_neighbor(b));
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
        }

        #[test]
        fn step_recovers_dir_on_full_range(a in arb_any_coord(), d in arb_dir()) {
            prop_assert_eq!(a + d + d.inverse(), a);
        }

        #[test]
        fn direction_defined_iff_neighbour(a in arb_coord(), dx in -2i32..=2, dy in -2i32..=2) {
            let b = Coord::new(a.x + dx, a.y + dy);
            prop_assert_eq!(b.direction_from(a).is_ok(), a.is_neighbor(b));
            prop_assert_eq!(a.is_neighbor(b), a.manhattan(b) == 1);
        }
    }
}
