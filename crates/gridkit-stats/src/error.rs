//! Error types for statistics routines.

use std::fmt;

/// Errors from statistics that are undefined on some inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsError {
    /// The sample has no values.
    EmptySample,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => write!(f, "sample is empty"),
        }
    }
}

impl std::error::Error for StatsError {}
