//! Error types for coordinate algebra and board construction.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors from the coordinate/direction algebra.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoordError {
    /// The two coordinates are not axis-aligned unit-distance neighbours,
    /// so no single [`Dir`](crate::Dir) leads from one to the other.
    ///
    /// Identical coordinates fall in this case too.
    NotAdjacent {
        /// Coordinate the direction would be applied to.
        from: Coord,
        /// Coordinate the direction was expected to reach.
        to: Coord,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAdjacent { from, to } => {
                write!(f, "invalid direction: {to} is not adjacent to {from}")
            }
        }
    }
}

impl Error for CoordError {}

/// Errors arising from board construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Attempted to construct a board with zero cells.
    EmptyBoard,
    /// A dimension does not fit in an `i32` coordinate axis.
    DimensionTooLarge {
        /// Which dimension ("width" or "height").
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "board {name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for BoardError {}
