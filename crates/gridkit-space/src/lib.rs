//! Dense grid storage for gridkit.
//!
//! [`Grid`] owns one value per cell of a [`Board`](gridkit_core::Board),
//! stored row-major so that [`Board::coords`](gridkit_core::Board::coords)
//! and [`Grid::iter`] visit cells in the same order. Traversal algorithms
//! keep their visited/distance state in a `Grid` and their frontier in a
//! ring buffer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
