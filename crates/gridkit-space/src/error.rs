//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The supplied cell buffer does not have one value per board cell.
    LengthMismatch {
        /// `board.cell_count()`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "grid needs {expected} cells, got {actual}")
            }
        }
    }
}

impl std::error::Error for GridError {}
