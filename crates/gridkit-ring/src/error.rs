//! Error type for rejected pushes.

use std::fmt;

/// A push was rejected because the ring buffer is full.
///
/// Carries the rejected value so the caller can recover it with
/// [`into_inner`](Self::into_inner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError<T>(pub T);

impl<T> CapacityError<T> {
    /// The value that could not be pushed.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring buffer is full")
    }
}

impl<T: fmt::Debug> std::error::Error for CapacityError<T> {}
