//! Core types for the gridkit workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate and direction algebra ([`Coord`], [`Dir`]) and the board
//! geometry ([`Board`]) that every container and traversal in the
//! workspace is addressed through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod coord;
pub mod error;

pub use board::{Board, BoardCoords, BOARD_HEIGHT, BOARD_WIDTH};
pub use coord::{Coord, Dir};
pub use error::{BoardError, CoordError};
