//! Descriptive statistics for gridkit simulation runs.
//!
//! Sample collections (path lengths, turn counts, scores) are summarised
//! with [`mean`], [`variance`], [`stddev`], and the five-number summary
//! returned by [`quantiles`]. Any primitive number is a [`Sample`].
//! [`ListDisplay`] renders a slice of values as `[a, b, c]` for
//! diagnostic output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod display;
pub mod error;
pub mod moments;
pub mod quantile;
pub mod sample;

pub use display::ListDisplay;
pub use error::StatsError;
pub use moments::{mean, stddev, variance};
pub use quantile::{quantiles, Quantiles};
pub use sample::Sample;
