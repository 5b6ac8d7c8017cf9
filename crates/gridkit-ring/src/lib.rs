//! Fixed-capacity ring buffer for gridkit traversals.
//!
//! [`RingBuffer`] is a double-ended queue whose storage is allocated once
//! at construction and never grows. Breadth-first search and 0-1 BFS use
//! it as the frontier: capacity is sized to the board's cell count, so a
//! traversal that enqueues each cell at most once can never overflow.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod ring;

pub use error::CapacityError;
pub use ring::{Iter, RingBuffer};
