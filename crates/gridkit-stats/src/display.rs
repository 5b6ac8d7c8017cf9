//! Bracketed list rendering.

use std::fmt;

/// Renders a slice as `[a, b, c]` using each element's `Display`.
///
/// ```
/// use gridkit_stats::ListDisplay;
///
/// assert_eq!(ListDisplay(&[1.5, 2.0]).to_string(), "[1.5, 2]");
/// assert_eq!(ListDisplay::<f64>(&[]).to_string(), "[]");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ListDisplay<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for ListDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}
